//! Enumerations carried inside messages.

use std::fmt;

macro_rules! error_codes {
    (
        default = $default:ident;
        $( $(#[$meta:meta])* $name:ident = $value:literal, )+
    ) => {
        /// Machine-readable reason attached to every API error.
        ///
        /// Codes this crate does not know are kept as [`ErrorCode::Other`] so
        /// they survive a decode and can still be matched on numerically.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum ErrorCode {
            $( $(#[$meta])* $name, )+
            /// A code not listed above.
            Other(i32),
        }

        impl ErrorCode {
            /// The numeric value sent on the wire.
            pub fn code(self) -> i32 {
                match self {
                    $( Self::$name => $value, )+
                    Self::Other(v) => v,
                }
            }

            /// The upstream name, e.g. `"InvalidPassword"`.
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$name => stringify!($name), )+
                    Self::Other(_) => "Other",
                }
            }
        }

        impl From<i32> for ErrorCode {
            fn from(v: i32) -> Self {
                match v {
                    $( $value => Self::$name, )+
                    v => Self::Other(v),
                }
            }
        }

        /// The variant for code 0, which a reply without a code field decodes to.
        impl Default for ErrorCode {
            fn default() -> Self { Self::$default }
        }
    };
}

error_codes! {
    default = UnsupportedMethod;

    /// The method requested is not supported.
    UnsupportedMethod = 0,
    /// A general error occurred.
    GeneralError = 1,
    /// An unexpected error occurred inside the service.
    InternalError = 2,
    /// Access is denied.
    AccessDenied = 3,
    /// The message is malformed.
    InvalidMessageFormat = 4,
    /// A value is missing.
    MissingValue = 5,
    /// A game is required to do this action.
    GameRequired = 6,
    /// An error occurred while contacting an external service.
    ExternalError = 7,
    /// The given argument value is outside the range of allowed values.
    ArgumentOutOfRange = 8,
    /// The game has been disabled.
    GameDisabled = 9,
    /// The game requested is not known by the server.
    UnknownGame = 10,
    /// The connection requested is not known by the server.
    UnknownConnection = 11,
    /// The auth given is invalid or malformatted.
    InvalidAuth = 12,
    /// There is no server in any of the selected server clusters.
    NoServersAvailable = 13,
    /// The room data for the room was over the allowed size limit.
    RoomDataTooLarge = 14,
    /// You are unable to create room because there is already a room with the specified id.
    RoomAlreadyExists = 15,
    /// The game you're connected to does not have a server type with the specified name.
    UnknownServerType = 16,
    /// There is no room running with that id.
    UnknownRoom = 17,
    /// You can't join the room when the RoomID is null or the empty string.
    MissingRoomId = 18,
    /// The room already has the maxmium amount of users in it.
    RoomIsFull = 19,
    /// The key you specified is not set as searchable.
    NotASearchColumn = 20,
    /// The QuickConnect method is not enabled for the game.
    QuickConnectMethodNotEnabled = 21,
    /// The user is unknown.
    UnknownUser = 22,
    /// The password supplied is incorrect.
    InvalidPassword = 23,
    /// The supplied data is incorrect.
    InvalidRegistrationData = 24,
    /// The key given for the BigDB object is not a valid BigDB key.
    InvalidBigDBKey = 25,
    /// The object exceeds the maximum allowed size for BigDB objects.
    BigDBObjectTooLarge = 26,
    /// Could not locate the database object.
    BigDBObjectDoesNotExist = 27,
    /// The specified table does not exist.
    UnknownTable = 28,
    /// The specified index does not exist.
    UnknownIndex = 29,
    /// The value given for the index does not match the expected type.
    InvalidIndexValue = 30,
    /// The operation was aborted because the user attempting it was not the creator of the object.
    NotObjectCreator = 31,
    /// The key is in use by another database object.
    KeyAlreadyUsed = 32,
    /// BigDB object could not be saved using optimistic locks as it's out of date.
    StaleVersion = 33,
    /// Cannot create circular references inside database objects.
    CircularReference = 34,
    /// The server could not complete the heartbeat.
    HeartbeatFailed = 40,
    /// The game code is invalid.
    InvalidGameCode = 41,
    /// Cannot access coins or items before vault has been loaded.
    VaultNotLoaded = 50,
    /// There is no PayVault provider with the specified id.
    UnknownPayVaultProvider = 51,
    /// The specified PayVault provider does not support direct purchase.
    DirectPurchaseNotSupportedByProvider = 52,
    /// The specified PayVault provider does not support buying coins.
    BuyingCoinsNotSupportedByProvider = 54,
    /// The user does not have enough coins in the PayVault to complete the purchase or debit.
    NotEnoughCoins = 55,
    /// The item does not exist in the vault.
    ItemNotInVault = 56,
    /// The chosen provider rejected one or more of the purchase arguments.
    InvalidPurchaseArguments = 57,
    /// The chosen provider is not configured correctly in the admin panel.
    InvalidPayVaultProviderSetup = 58,
    /// Unable to locate the custom PartnerPay action with the given key.
    UnknownPartnerPayAction = 70,
    /// The given type was invalid.
    InvalidType = 80,
    /// The index was out of bounds from the range of acceptable values.
    IndexOutOfBounds = 81,
    /// The given identifier does not match the expected format.
    InvalidIdentifier = 82,
    /// The given argument did not have the expected value.
    InvalidArgument = 83,
    /// This client has been logged out.
    LoggedOut = 84,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(v) => write!(f, "ErrorCode({v})"),
            code           => write!(f, "{}", code.name()),
        }
    }
}

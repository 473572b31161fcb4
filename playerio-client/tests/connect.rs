use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use playerio_client::{
    Config, ErrorCode, HttpTransport, InvocationError, PlayerIo, Registration, Transport,
    TransportError, calc_auth,
};
use playerio_proto::{
    Deserializable, Serializable,
    convert::from_key_value_pairs,
    functions,
    types::{ConnectOutput, Error, RegistrationError, ResponseHeader},
};

// ── MockTransport ─────────────────────────────────────────────────────────────

struct Call {
    method: u32,
    body:   Vec<u8>,
    token:  Option<String>,
}

#[derive(Default)]
struct MockTransport {
    replies:   Mutex<VecDeque<Vec<u8>>>,
    by_method: Mutex<HashMap<u32, Vec<u8>>>,
    calls:     Mutex<Vec<Call>>,
}

impl MockTransport {
    fn reply(&self, envelope: Vec<u8>) -> &Self {
        self.replies.lock().unwrap().push_back(envelope);
        self
    }

    /// Answer every call to `method` with `envelope`, ahead of the queue.
    fn reply_to(&self, method: u32, envelope: Vec<u8>) -> &Self {
        self.by_method.lock().unwrap().insert(method, envelope);
        self
    }

    fn methods(&self) -> Vec<u32> {
        self.calls.lock().unwrap().iter().map(|c| c.method).collect()
    }

    fn last_body<M: Deserializable>(&self) -> M {
        let calls = self.calls.lock().unwrap();
        M::from_bytes(&calls.last().expect("no call recorded").body).unwrap()
    }

    fn last_token(&self) -> Option<String> {
        self.calls.lock().unwrap().last().and_then(|c| c.token.clone())
    }
}

impl Transport for MockTransport {
    async fn post(
        &self,
        method: u32,
        body:   Vec<u8>,
        token:  Option<&str>,
    ) -> Result<Vec<u8>, TransportError> {
        self.calls.lock().unwrap().push(Call { method, body, token: token.map(str::to_owned) });
        // let concurrent requests interleave between send and reply
        tokio::task::yield_now().await;
        if let Some(env) = self.by_method.lock().unwrap().get(&method) {
            return Ok(env.clone());
        }
        self.replies.lock().unwrap().pop_front().ok_or(TransportError::Status(503))
    }
}

fn ok(payload: &impl Serializable) -> Vec<u8> {
    let mut env = vec![0, 1];
    env.extend(payload.to_bytes());
    env
}

fn err(payload: &impl Serializable) -> Vec<u8> {
    let mut env = vec![0, 0];
    env.extend(payload.to_bytes());
    env
}

fn session(token: &str, user_id: &str) -> Vec<u8> {
    ok(&ConnectOutput { token: token.into(), user_id: user_id.into() })
}

fn pio() -> PlayerIo<MockTransport> {
    PlayerIo::with_transport(MockTransport::default())
}

fn mock(pio: &PlayerIo<MockTransport>) -> &MockTransport {
    pio.channel().transport()
}

// ── Quick-connect ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn simple_connect_returns_session() {
    let pio = pio();
    mock(&pio).reply(session("T", "U"));

    let client = pio
        .quick_connect()
        .simple_connect("game1", "user@example.com", "pw")
        .await
        .unwrap();

    assert_eq!(client.token(), "T");
    assert_eq!(client.user_id(), "U");
    assert_eq!(mock(&pio).methods(), [400]);
    assert_eq!(mock(&pio).last_token(), None);

    let sent: functions::SimpleConnect = mock(&pio).last_body();
    assert_eq!(sent.game_id, "game1");
    assert_eq!(sent.username_or_email, "user@example.com");
    assert_eq!(sent.password, "pw");
}

#[tokio::test]
async fn simple_register_propagates_registration_error() {
    let pio = pio();
    mock(&pio).reply(err(&RegistrationError {
        error_code:     ErrorCode::InvalidRegistrationData,
        message:        "username taken".into(),
        username_error: Some("already in use".into()),
        ..Default::default()
    }));

    let result = pio
        .quick_connect()
        .simple_register("game1", Registration::new("alice", "pw"))
        .await;

    assert_eq!(mock(&pio).methods(), [403]);
    let e = result.expect_err("no client may be built from an error reply");
    assert!(e.is(ErrorCode::InvalidRegistrationData));
    match e {
        InvocationError::Api(reg) => {
            assert_eq!(reg.message, "username taken");
            assert_eq!(reg.username_error.as_deref(), Some("already in use"));
            assert_eq!(reg.password_error, None);
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn simple_register_sends_optional_fields() {
    let pio = pio();
    mock(&pio).reply(session("T", "alice"));

    let extra: HashMap<String, String> = [
        ("gender".to_owned(), "f".to_owned()),
        ("nickname".to_owned(), String::new()),
    ]
    .into_iter()
    .collect();

    let client = pio
        .quick_connect()
        .simple_register(
            "game1",
            Registration::new("alice", "pw")
                .email("alice@example.com")
                .captcha("ck", "cv")
                .extra_data(extra.clone()),
        )
        .await
        .unwrap();
    assert_eq!(client.user_id(), "alice");

    let sent: functions::SimpleRegister = mock(&pio).last_body();
    assert_eq!(sent.game_id, "game1");
    assert_eq!(sent.username, "alice");
    assert_eq!(sent.email.as_deref(), Some("alice@example.com"));
    assert_eq!(sent.captcha_key.as_deref(), Some("ck"));
    assert_eq!(sent.captcha_value.as_deref(), Some("cv"));
    assert_eq!(from_key_value_pairs(&sent.extra_data), extra);
}

#[tokio::test]
async fn simple_register_omits_unset_fields() {
    let pio = pio();
    mock(&pio).reply(session("T", "bob"));

    pio.quick_connect()
        .simple_register("game1", Registration::new("bob", "pw"))
        .await
        .unwrap();

    let sent: functions::SimpleRegister = mock(&pio).last_body();
    assert_eq!(sent.email, None);
    assert_eq!(sent.captcha_key, None);
    assert_eq!(sent.captcha_value, None);
    assert!(sent.extra_data.is_empty());
}

#[tokio::test]
async fn every_variant_sends_its_action_code() {
    let pio = pio();
    for _ in 0..6 {
        mock(&pio).reply(session("T", "U"));
    }
    mock(&pio).reply(vec![0, 1]); // empty success for password recovery

    let qc = pio.quick_connect();
    pio.connect("g", "public", "u", None).await.unwrap();
    qc.simple_connect("g", "u", "pw").await.unwrap();
    qc.facebook_oauth_connect("g", "fb-token").await.unwrap();
    qc.kongregate_connect("g", "kong-user", "kong-token").await.unwrap();
    qc.steam_connect("g", "480", "ticket").await.unwrap();
    qc.simple_register("g", Registration::new("u", "pw")).await.unwrap();
    qc.simple_recover_password("g", "u@example.com").await.unwrap();

    assert_eq!(mock(&pio).methods(), [10, 400, 418, 400, 421, 403, 406]);
}

#[tokio::test]
async fn provider_connects_send_their_fields() {
    let pio = pio();
    for _ in 0..3 {
        mock(&pio).reply(session("T", "U"));
    }
    let qc = pio.quick_connect();

    qc.facebook_oauth_connect("g", "fb-token").await.unwrap();
    let fb: functions::FacebookOAuthConnect = mock(&pio).last_body();
    assert_eq!(fb.access_token, "fb-token");

    qc.kongregate_connect("g", "kong-user", "kong-token").await.unwrap();
    let kong: functions::KongregateConnect = mock(&pio).last_body();
    assert_eq!((kong.user_id.as_str(), kong.game_auth_token.as_str()), ("kong-user", "kong-token"));

    qc.steam_connect("g", "480", "ticket").await.unwrap();
    let steam: functions::SteamConnect = mock(&pio).last_body();
    assert_eq!((steam.steam_app_id.as_str(), steam.steam_session_ticket.as_str()), ("480", "ticket"));
}

#[tokio::test]
async fn recover_password_error_is_general() {
    let pio = pio();
    mock(&pio).reply(err(&Error::new(ErrorCode::UnknownUser, "no such user")));

    let e = pio
        .quick_connect()
        .simple_recover_password("g", "ghost")
        .await
        .unwrap_err();
    assert!(e.is(ErrorCode::UnknownUser));
}

// ── Direct connect ────────────────────────────────────────────────────────────

#[tokio::test]
async fn connect_forwards_auth() {
    let pio = pio();
    mock(&pio).reply(session("T", "alice"));

    let auth = calc_auth("alice", "secret");
    pio.connect("game1", "secure", "alice", Some(&auth)).await.unwrap();

    let sent: functions::Connect = mock(&pio).last_body();
    assert_eq!(sent.connection_id, "secure");
    assert_eq!(sent.user_id, "alice");
    assert_eq!(sent.auth, Some(auth));
}

#[tokio::test]
async fn connect_without_auth_leaves_it_unset() {
    let pio = pio();
    mock(&pio).reply(session("T", "alice"));

    pio.connect("game1", "public", "alice", None).await.unwrap();
    let sent: functions::Connect = mock(&pio).last_body();
    assert_eq!(sent.auth, None);
}

// ── Failures ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn general_error_propagates_and_channel_stays_usable() {
    let pio = pio();
    mock(&pio)
        .reply(err(&Error::new(ErrorCode::InvalidPassword, "wrong password")))
        .reply(session("T", "U"));

    let e = pio
        .quick_connect()
        .simple_connect("g", "u", "bad")
        .await
        .unwrap_err();
    assert!(e.is(ErrorCode::InvalidPassword));
    assert_eq!(e.to_string(), "InvalidPassword: wrong password");

    let client = pio.quick_connect().simple_connect("g", "u", "good").await.unwrap();
    assert_eq!(client.token(), "T");
}

#[tokio::test]
async fn transport_failure_is_not_an_api_error() {
    let pio = pio(); // no reply queued → 503

    let e = pio.connect("g", "public", "u", None).await.unwrap_err();
    assert!(matches!(e, InvocationError::Transport(TransportError::Status(503))));
    assert_eq!(e.error_code(), None);
}

#[tokio::test]
async fn truncated_envelope_is_a_decode_error() {
    use playerio_proto::deserialize::Error as DecodeError;
    let pio = pio();
    mock(&pio).reply(vec![0]);

    let e = pio.connect("g", "public", "u", None).await.unwrap_err();
    assert!(matches!(e, InvocationError::Deserialize(DecodeError::UnexpectedEof)));
}

#[tokio::test]
async fn envelope_header_is_skipped() {
    let pio = pio();
    let header = ResponseHeader { token: Some("hdr-token".into()) }.to_bytes();
    let mut env = vec![1];
    env.extend((header.len() as u16).to_be_bytes());
    env.extend(&header);
    env.push(1);
    env.extend(ConnectOutput { token: "T".into(), user_id: "U".into() }.to_bytes());
    mock(&pio).reply(env);

    let client = pio.connect("g", "public", "u", None).await.unwrap();
    assert_eq!((client.token(), client.user_id()), ("T", "U"));
}

#[tokio::test]
async fn any_leading_byte_but_one_means_no_header() {
    let pio = pio();
    let mut env = vec![2, 1];
    env.extend(ConnectOutput { token: "T".into(), user_id: "U".into() }.to_bytes());
    mock(&pio).reply(env);

    let client = pio.connect("g", "public", "u", None).await.unwrap();
    assert_eq!((client.token(), client.user_id()), ("T", "U"));
}

#[tokio::test]
async fn any_status_byte_but_one_is_an_error_reply() {
    let pio = pio();
    let mut env = vec![0, 2];
    env.extend(Error::new(ErrorCode::AccessDenied, "nope").to_bytes());
    mock(&pio).reply(env);

    let e = pio.connect("g", "public", "u", None).await.unwrap_err();
    assert!(e.is(ErrorCode::AccessDenied));
    assert!(matches!(e, InvocationError::Api(ref api) if api.message == "nope"));
}

// ── Session handle ────────────────────────────────────────────────────────────

#[tokio::test]
async fn client_invoke_attaches_token() {
    let pio = pio();
    mock(&pio).reply(session("tok-1", "U")).reply(vec![0, 1]);

    let client = pio.quick_connect().simple_connect("g", "u", "pw").await.unwrap();
    client
        .invoke(&functions::SimpleRecoverPassword {
            game_id:           "g".into(),
            username_or_email: "u".into(),
        })
        .await
        .unwrap();

    assert_eq!(mock(&pio).methods(), [400, 406]);
    assert_eq!(mock(&pio).last_token().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn sessions_share_one_channel() {
    let pio = pio();
    mock(&pio).reply(session("A", "a")).reply(session("B", "b"));

    let a = pio.quick_connect().simple_connect("g", "a", "pw").await.unwrap();
    let b = pio.connect("g", "public", "b", None).await.unwrap();

    assert!(Arc::ptr_eq(a.channel(), pio.channel()));
    assert!(Arc::ptr_eq(b.channel(), pio.channel()));
    assert_eq!((a.token(), b.token()), ("A", "B"));

    let a2 = a.clone();
    assert_eq!(a2.user_id(), "a");
    assert!(!format!("{a2:?}").contains('A'), "Debug must not leak the token");
}

#[tokio::test]
async fn concurrent_connects_get_their_own_sessions() {
    let pio = pio();
    mock(&pio)
        .reply_to(10, session("tok-direct", "direct"))
        .reply_to(400, session("tok-simple", "simple"))
        .reply_to(421, session("tok-steam", "steam"));

    let qc = pio.quick_connect();
    let (simple, direct, steam) = tokio::join!(
        qc.simple_connect("g", "simple", "pw"),
        pio.connect("g", "public", "direct", None),
        qc.steam_connect("g", "480", "ticket"),
    );
    let (simple, direct, steam) = (simple.unwrap(), direct.unwrap(), steam.unwrap());

    assert_eq!((simple.token(), simple.user_id()), ("tok-simple", "simple"));
    assert_eq!((direct.token(), direct.user_id()), ("tok-direct", "direct"));
    assert_eq!((steam.token(), steam.user_id()), ("tok-steam", "steam"));
    for client in [&simple, &direct, &steam] {
        assert!(Arc::ptr_eq(client.channel(), pio.channel()));
    }

    let mut methods = mock(&pio).methods();
    methods.sort_unstable();
    assert_eq!(methods, [10, 400, 421]);
}

#[test]
fn quick_connect_is_built_once() {
    let pio = pio();
    assert!(std::ptr::eq(pio.quick_connect(), pio.quick_connect()));
}

// ── HttpTransport ─────────────────────────────────────────────────────────────

#[test]
fn http_endpoint_appends_action_code() {
    let t = HttpTransport::new(&Config {
        api_url: "http://localhost:8080/api/".into(),
        ..Config::default()
    })
    .unwrap();
    assert_eq!(t.endpoint(400), "http://localhost:8080/api/400");

    let default = HttpTransport::new(&Config::default()).unwrap();
    assert_eq!(default.endpoint(10), "http://api.playerio.com/api/10");
}

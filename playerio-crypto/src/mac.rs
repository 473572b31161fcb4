/// Calculate the HMAC-SHA1 of one or more byte slices concatenated, keyed by
/// `$key`.
///
/// ```
/// let tag = playerio_crypto::hmac_sha1!(b"key", b"The quick brown fox ", b"jumps over the lazy dog");
/// assert_eq!(playerio_crypto::to_hex(&tag), "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9");
/// ```
#[macro_export]
macro_rules! hmac_sha1 {
    ( $key:expr, $( $x:expr ),+ ) => {{
        use $crate::__private::hmac::Mac;
        type HmacSha1 = $crate::__private::hmac::Hmac<$crate::__private::sha1::Sha1>;
        let mut mac = <HmacSha1 as Mac>::new_from_slice($key)
            .expect("HMAC accepts keys of any length");
        $( mac.update($x); )+
        let out: [u8; 20] = mac.finalize().into_bytes().into();
        out
    }};
}

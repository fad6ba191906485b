use super::*;
use kvsign_core::ErrorKind;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("&"; "trailing ampersand")]
#[test_case("&&X-Amz-ClientId=viewer"; "double ampersand")]
fn test_sign_with_stray_ampersand(suffix: &str) {
    let signer = init_signing_test();

    let err = signer
        .sign(
            &format!("{}{suffix}", master_url()),
            &long_term_credential(),
            at(1690186022101),
        )
        .expect_err("query must be malformed");

    assert_eq!(err.kind(), ErrorKind::MalformedQuery);
    assert!(err.to_string().contains("malformed"));
}

#[test]
fn test_sign_with_too_many_equal_signs() {
    let signer = init_signing_test();
    let segment = "X-Amz-Security-Token=a=b=c";

    let err = signer
        .sign(
            &format!("{}&{segment}", master_url()),
            &long_term_credential(),
            at(1690186022101),
        )
        .expect_err("query must be malformed");

    assert_eq!(err.kind(), ErrorKind::MalformedQuery);
    assert!(err.to_string().contains(segment));
}

#[test]
fn test_sign_with_missing_equal_sign() {
    let signer = init_signing_test();

    let err = signer
        .sign(
            &format!("{MASTER_ENDPOINT}?X-Amz-ChannelARN"),
            &long_term_credential(),
            at(1690186022101),
        )
        .expect_err("query must be malformed");

    assert_eq!(err.kind(), ErrorKind::MalformedQuery);
    assert!(err.to_string().contains("X-Amz-ChannelARN"));
}

#[test_case("/?X-Amz-ChannelARN=arn"; "relative url")]
#[test_case("wss://exa mple.com?X-Amz-ChannelARN=arn"; "invalid host")]
fn test_sign_with_bad_url(url: &str) {
    let signer = init_signing_test();

    let err = signer
        .sign(url, &long_term_credential(), at(1690186022101))
        .expect_err("url must be invalid");

    assert_eq!(err.kind(), ErrorKind::BadUrl);
    assert!(err.is_url_error());
}

#[test]
fn test_sign_without_query() {
    let signer = init_signing_test();

    let actual = signer
        .sign(MASTER_ENDPOINT, &long_term_credential(), at(1690186022101))
        .expect("a url without query only carries the signing parameters");

    assert!(actual.starts_with(&format!(
        "{MASTER_ENDPOINT}/?X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Credential="
    )));
    assert!(!actual.contains("X-Amz-ChannelARN"));
}

//! Wire encoding: one `application/x-www-form-urlencoded` line per hit.

use beacon_core::Payload;

/// Encode a single hit as `key=value&key2=value2`.
pub fn encode_hit(payload: &Payload) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (code, value) in payload {
        serializer.append_pair(code, &value.to_string());
    }
    serializer.finish()
}

/// Encode hits in order, joined by a single newline.
pub fn encode_payload(payloads: &[Payload]) -> String {
    payloads.iter().map(encode_hit).collect::<Vec<_>>().join("\n")
}

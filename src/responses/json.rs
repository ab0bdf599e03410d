use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde_json::Value;

pub fn json_response(status: u16, body: &Value) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body.to_string()))
        .unwrap();

    Ok(resp)
}

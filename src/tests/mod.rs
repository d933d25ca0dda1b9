
use serde_json::{json, Value};

use crate::api::models::Credentials;

pub(crate) fn test_credentials() -> Credentials {
    Credentials {
        username: "admin".to_string(),
        password: "secret".to_string(),
    }
}

pub(crate) fn zones_body() -> Value {
    json!({
        "status": "ok",
        "response": {
            "zones": [
                { "name": "example.com", "type": "Primary", "internal": false, "disabled": false },
                { "name": "lab.internal", "type": "Forwarder", "internal": false, "disabled": true }
            ]
        }
    })
}

pub(crate) fn records_body() -> Value {
    json!({
        "status": "ok",
        "response": {
            "zone": { "name": "example.com", "type": "Primary", "disabled": false },
            "records": [
                { "name": "example.com", "type": "SOA", "ttl": 900, "disabled": false,
                  "rData": { "primaryNameServer": "ns1.example.com" } },
                { "name": "www.example.com", "type": "A", "ttl": 3600, "disabled": false,
                  "rData": { "ipAddress": "192.0.2.10" } }
            ]
        }
    })
}

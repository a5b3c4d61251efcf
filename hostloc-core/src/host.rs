//! Host: the service name, address and port recorded against a span.

use std::net::Ipv4Addr;

use serde::{Serialize, Serializer};

/// Located host. Serializes to the Zipkin endpoint shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Host {
    pub service_name: String,
    pub address: String,
    pub port: u16,
}

impl Host {
    pub fn new(service_name: impl Into<String>, address: impl Into<String>, port: u16) -> Self {
        Self {
            service_name: service_name.into(),
            address: address.into(),
            port,
        }
    }

    /// Address as IPv4, if it is one.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        self.address.parse().ok()
    }

    /// IPv4 address packed big-endian, as older Zipkin endpoints carry it.
    pub fn ipv4_bits(&self) -> Option<u32> {
        self.ipv4().map(u32::from)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Endpoint<'a> {
    service_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ipv4: Option<Ipv4Addr>,
    port: u16,
}

impl Serialize for Host {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Endpoint {
            service_name: &self.service_name,
            ipv4: self.ipv4(),
            port: self.port,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_bits_are_big_endian() {
        let host = Host::new("orders", "10.0.0.1", 9000);
        assert_eq!(host.ipv4_bits(), Some(0x0a00_0001));
    }

    #[test]
    fn endpoint_json_omits_non_ipv4_address() {
        let host = Host::new("orders", "orders.internal", 9000);
        assert_eq!(host.ipv4(), None);
        let json = serde_json::to_value(&host).unwrap();
        assert_eq!(json, serde_json::json!({"serviceName": "orders", "port": 9000}));
    }

    #[test]
    fn endpoint_json_carries_ipv4() {
        let host = Host::new("orders", "192.168.1.20", 8080);
        let json = serde_json::to_value(&host).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"serviceName": "orders", "ipv4": "192.168.1.20", "port": 8080})
        );
    }
}

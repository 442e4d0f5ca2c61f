//! Fixed one-to-one measurement-protocol parameters and their aliases.

use crate::coerce::Coercer::{self, Float, Integer, Text};
use crate::registry::AliasRegistry;

type Declaration = (Coercer, &'static str, &'static [&'static str]);

/// General, campaign, technical, and mobile-app parameters.
const GENERAL: &[Declaration] = &[
    (Integer, "v", &["protocol-version"]),
    (Text, "cid", &["client-id", "clientId", "clientid"]),
    (Text, "tid", &["trackingId", "account"]),
    (Text, "uid", &["user-id", "userId", "userid"]),
    (Text, "uip", &["user-ip", "userIp", "ipaddr"]),
    (Text, "ua", &["userAgent", "userAgentOverride", "user-agent"]),
    (Text, "dp", &["page", "path"]),
    (Text, "dt", &["title", "pagetitle", "pageTitle", "page-title"]),
    (Text, "dl", &["location"]),
    (Text, "dh", &["hostname"]),
    (Text, "sc", &["sessioncontrol", "session-control", "sessionControl"]),
    (Text, "dr", &["referrer", "referer"]),
    (Integer, "qt", &["queueTime", "queue-time"]),
    (Text, "t", &["hitType", "hittype"]),
    (Integer, "aip", &["anonymizeIp", "anonIp", "anonymize-ip"]),
    // Campaign attribution
    (Text, "cn", &["campaign", "campaignName", "campaign-name"]),
    (Text, "cs", &["source", "campaignSource", "campaign-source"]),
    (Text, "cm", &["medium", "campaignMedium", "campaign-medium"]),
    (Text, "ck", &["keyword", "campaignKeyword", "campaign-keyword"]),
    (Text, "cc", &["content", "campaignContent", "campaign-content"]),
    (Text, "ci", &["campaignId", "campaignID", "campaign-id"]),
    // Technical specs
    (Text, "sr", &["screenResolution", "screen-resolution", "resolution"]),
    (Text, "vp", &["viewport", "viewportSize", "viewport-size"]),
    (Text, "de", &["encoding", "documentEncoding", "document-encoding"]),
    (Integer, "sd", &["colors", "screenColors", "screen-colors"]),
    (Text, "ul", &["language", "user-language", "userLanguage"]),
    // Mobile app
    (Text, "an", &["appName", "app-name", "app"]),
    (
        Text,
        "cd",
        &["contentDescription", "screenName", "screen-name", "content-description"],
    ),
    (Text, "av", &["appVersion", "app-version", "version"]),
    (
        Text,
        "aid",
        &["appID", "appId", "application-id", "app-id", "applicationId"],
    ),
    (Text, "aiid", &["appInstallerId", "app-installer-id"]),
];

/// Classic e-commerce transaction and item parameters.
const ECOMMERCE: &[Declaration] = &[
    (
        Text,
        "ta",
        &["affiliation", "transactionAffiliation", "transaction-affiliation"],
    ),
    (Text, "ti", &["transaction", "transactionId", "transaction-id"]),
    (Float, "tr", &["revenue", "transactionRevenue", "transaction-revenue"]),
    (Float, "ts", &["shipping", "transactionShipping", "transaction-shipping"]),
    (Float, "tt", &["tax", "transactionTax", "transaction-tax"]),
    (Text, "cu", &["currency", "transactionCurrency", "transaction-currency"]),
    (Text, "in", &["item-name", "itemName"]),
    (Float, "ip", &["item-price", "itemPrice"]),
    (Float, "iq", &["item-quantity", "itemQuantity"]),
    (Text, "ic", &["item-code", "sku", "itemCode"]),
    (
        Text,
        "iv",
        &["item-variation", "item-category", "itemCategory", "itemVariation"],
    ),
];

/// Event, social, exception, experiment, and user-timing parameters.
const INTERACTIONS: &[Declaration] = &[
    (Text, "ec", &["event-category", "eventCategory", "category"]),
    (Text, "ea", &["event-action", "eventAction", "action"]),
    (Text, "el", &["event-label", "eventLabel", "label"]),
    (Integer, "ev", &["event-value", "eventValue", "value"]),
    (
        Integer,
        "ni",
        &["noninteractive", "nonInteractive", "noninteraction", "nonInteraction"],
    ),
    // Social
    (Text, "sa", &["social-action", "socialAction"]),
    (Text, "sn", &["social-network", "socialNetwork"]),
    (Text, "st", &["social-target", "socialTarget"]),
    // Exceptions
    (
        Text,
        "exd",
        &["exception-description", "exceptionDescription", "exDescription"],
    ),
    (Integer, "exf", &["exception-fatal", "exceptionFatal", "exFatal"]),
    // Experiments
    (Text, "exp", &["experiment"]),
    // User timing
    (Text, "utc", &["timingCategory", "timing-category"]),
    (Text, "utv", &["timingVariable", "timing-variable"]),
    (Integer, "utt", &["time", "timingTime", "timing-time"]),
    (Text, "utl", &["timingLabel", "timing-label"]),
    (Float, "dns", &["timingDNS", "timing-dns"]),
    (Float, "pdt", &["timingPageLoad", "timing-page-load"]),
    (Float, "rrt", &["timingRedirect", "timing-redirect"]),
    (Text, "tcp", &["timingTCPConnect", "timing-tcp-connect"]),
    (Text, "srt", &["timingServerResponse", "timing-server-response"]),
];

/// Register every fixed parameter in declaration order.
pub fn register_protocol(registry: &mut AliasRegistry) {
    for (coercer, wire_code, names) in GENERAL.iter().chain(ECOMMERCE).chain(INTERACTIONS) {
        registry.register(*coercer, wire_code, names);
    }
}

#[cfg(test)]
mod tests {
    use beacon_core::{ParamValue, Value};

    use super::*;

    fn protocol() -> AliasRegistry {
        let mut registry = AliasRegistry::new();
        register_protocol(&mut registry);
        registry
    }

    #[test]
    fn version_alias_points_at_app_version() {
        // "version" is the app version; the protocol version is "protocol-version".
        let registry = protocol();
        assert_eq!(registry.resolve_name("version").unwrap(), "av");
        assert_eq!(registry.resolve_name("protocol-version").unwrap(), "v");
    }

    #[test]
    fn transaction_amounts_are_floats() {
        let registry = protocol();
        let (code, value) = registry.resolve("transactionRevenue", &Value::from(28)).unwrap();
        assert_eq!(code, "tr");
        assert_eq!(value, ParamValue::Float(28.0));
    }

    #[test]
    fn timing_time_is_an_integer() {
        let registry = protocol();
        let (code, value) = registry.resolve("time", &Value::from("120")).unwrap();
        assert_eq!(code, "utt");
        assert_eq!(value, ParamValue::Int(120));
    }
}

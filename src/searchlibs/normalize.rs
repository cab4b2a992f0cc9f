use crate::searchlibs::DecodeError;
use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use url::Url;

/// One catalog entry with every field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnackRecord {
    pub name: String,
    pub maker: String,
    pub link: Url,
    pub image: Url,
}

/// An entry of the `item` array exactly as received. Any field may be absent,
/// `null`, or of the wrong type; all three read as `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct WireItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub maker: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Name,
    Maker,
    Url,
    Image,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn parse_uri(raw: Option<String>) -> Option<Url> {
    raw.and_then(|s| Url::parse(&s).ok())
}

impl WireItem {
    /// Admits the item only when all four fields are usable.
    pub fn into_record(self) -> Result<SnackRecord, MissingField> {
        let name = self.name.ok_or(MissingField::Name)?;
        let maker = self.maker.ok_or(MissingField::Maker)?;
        let link = parse_uri(self.url).ok_or(MissingField::Url)?;
        let image = parse_uri(self.image).ok_or(MissingField::Image)?;

        Ok(SnackRecord {
            name,
            maker,
            link,
            image,
        })
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub struct RecordNormalizer;

impl RecordNormalizer {
    /// Decodes a `{ "item": [...] }` payload into records, in payload order.
    ///
    /// Incomplete items are skipped, not reported. An absent or `null` `item`
    /// is an empty result. Only unparseable JSON, a non-object top level, or a
    /// non-array `item` fail.
    pub fn normalize(bytes: &[u8]) -> Result<Vec<SnackRecord>, DecodeError> {
        let payload: Value = serde_json::from_slice(bytes)?;

        let envelope = payload.as_object().ok_or_else(|| {
            DecodeError::Envelope(format!("expected an object, found {}", describe(&payload)))
        })?;

        let items = match envelope.get("item") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(DecodeError::Envelope(format!(
                    "`item` must be an array, found {}",
                    describe(other)
                )))
            }
        };

        let mut records = Vec::with_capacity(items.len());
        let mut dropped = 0;

        for item in items {
            // A non-object would otherwise deserialize positionally from an array.
            if !item.is_object() {
                dropped += 1;
                debug!("skipping item that is {}", describe(item));
                continue;
            }

            match WireItem::deserialize(item).unwrap_or_default().into_record() {
                Ok(record) => records.push(record),
                Err(field) => {
                    dropped += 1;
                    debug!("skipping item without usable {:?}", field);
                }
            }
        }

        debug!("normalized {} records, dropped {}", records.len(), dropped);
        Ok(records)
    }
}

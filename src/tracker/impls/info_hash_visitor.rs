use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::info_hash_visitor::InfoHashVisitor;

impl<'v> serde::de::Visitor<'v> for InfoHashVisitor {
    type Value = InfoHash;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "a 40 character long hash")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.len() != 40 {
            return Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(v),
                &"expected a 40 character long string",
            ));
        }
        InfoHash::decode_hex(v.as_bytes()).ok_or_else(|| serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(v),
            &"expected a hexadecimal string",
        ))
    }

    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        InfoHash::decode_hex(v).ok_or_else(|| serde::de::Error::invalid_length(v.len(), &"40 hexadecimal bytes"))
    }
}

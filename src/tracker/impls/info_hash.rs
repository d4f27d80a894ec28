use std::fmt;
use std::fmt::Formatter;
use crate::common::common::{bin2hex, hex_to_nibble};
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::info_hash_visitor::InfoHashVisitor;

impl InfoHash {
    /// First four bytes as a big-endian integer, the source of the shard bits.
    #[inline(always)]
    pub fn prefix(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    pub(crate) fn decode_hex(input: &[u8]) -> Option<InfoHash> {
        if input.len() != 40 {
            return None;
        }
        let mut result = InfoHash([0u8; 20]);
        for (i, chunk) in input.chunks_exact(2).enumerate() {
            let high = hex_to_nibble(chunk[0]);
            let low = hex_to_nibble(chunk[1]);
            if high == 0xFF || low == 0xFF {
                return None;
            }
            result.0[i] = (high << 4) | low;
        }
        Some(result)
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl std::str::FromStr for InfoHash {
    type Err = binascii::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 40 {
            return Err(binascii::ConvertError::InvalidInputLength);
        }
        InfoHash::decode_hex(s.as_bytes()).ok_or(binascii::ConvertError::InvalidInput)
    }
}

impl TryFrom<&[u8]> for InfoHash {
    type Error = binascii::ConvertError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 20] = data.try_into().map_err(|_| binascii::ConvertError::InvalidInputLength)?;
        Ok(InfoHash(bytes))
    }
}

impl From<[u8; 20]> for InfoHash {
    fn from(data: [u8; 20]) -> Self {
        InfoHash(data)
    }
}

impl serde::ser::Serialize for InfoHash {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::de::Deserialize<'de> for InfoHash {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        des.deserialize_str(InfoHashVisitor)
    }
}

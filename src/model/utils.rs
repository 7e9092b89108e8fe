use std::fmt;

use serde::de::{Error as DeError, Visitor};

use crate::internal::prelude::*;

/// Discord sends snowflakes as strings, but older payloads and hand-written test fixtures often
/// use plain integers. Accept both.
pub(crate) struct SnowflakeVisitor;

impl Visitor<'_> for SnowflakeVisitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a snowflake as a string or integer")
    }

    fn visit_str<E: DeError>(self, v: &str) -> StdResult<Self::Value, E> {
        v.parse().map_err(|_| E::custom(format_args!("invalid snowflake: {v}")))
    }

    fn visit_u64<E: DeError>(self, v: u64) -> StdResult<Self::Value, E> {
        Ok(v)
    }

    fn visit_i64<E: DeError>(self, v: i64) -> StdResult<Self::Value, E> {
        u64::try_from(v).map_err(|_| E::custom(format_args!("negative snowflake: {v}")))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::id::UserId;

    #[test]
    fn snowflakes_accept_strings_and_integers() {
        let from_str: UserId = serde_json::from_str(r#""80351110224678912""#).unwrap();
        let from_int: UserId = serde_json::from_str("80351110224678912").unwrap();

        assert_eq!(from_str, from_int);
        assert_eq!(serde_json::to_string(&from_int).unwrap(), r#""80351110224678912""#);
        assert!(serde_json::from_str::<UserId>(r#""nope""#).is_err());
        assert!(serde_json::from_str::<UserId>("-1").is_err());
    }
}

// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::iterators::IndexedIter;
use crate::{Array, Ix};

/// Version tag of the serialized array format.
pub const ARRAY_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized array matches the current
/// `ARRAY_FORMAT_VERSION`.
pub fn verify_version<E>(v: u8) -> Result<(), E>
where
    E: de::Error,
{
    if v != ARRAY_FORMAT_VERSION {
        let err_msg = format!("unknown array version: {}", v);
        Err(de::Error::custom(err_msg))
    } else {
        Ok(())
    }
}

/// The array is written as `{ v, dim, data }` with `data` in logical
/// row-major order of the current shape; the strides are not written.
///
/// **Requires crate feature `"serde"`**
impl<A, const D: usize> Serialize for Array<A, D>
where
    A: Serialize,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let mut state = serializer.serialize_struct("Array", 3)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("dim", &self.shape()[..])?;
        state.serialize_field("data", &Sequence(self.indexed_iter()))?;
        state.end()
    }
}

// private iterator wrapper
struct Sequence<'a, A, const D: usize>(IndexedIter<'a, A, D>);

impl<'a, A, const D: usize> Serialize for Sequence<'a, A, D>
where
    A: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let iter = &self.0;
        let mut seq = serializer.serialize_seq(Some(iter.len()))?;
        for (_, elt) in iter.clone() {
            seq.serialize_element(elt)?;
        }
        seq.end()
    }
}

struct ArrayVisitor<A, const D: usize> {
    _marker: PhantomData<A>,
}

enum ArrayField {
    Version,
    Dim,
    Data,
}

impl<A, const D: usize> ArrayVisitor<A, D> {
    pub fn new() -> Self {
        ArrayVisitor { _marker: PhantomData }
    }
}

static ARRAY_FIELDS: &[&str] = &["v", "dim", "data"];

/// Deserializes into a standard layout array.
///
/// **Requires crate feature `"serde"`**
impl<'de, A, const D: usize> Deserialize<'de> for Array<A, D>
where
    A: Deserialize<'de>,
{
    fn deserialize<Di>(deserializer: Di) -> Result<Array<A, D>, Di::Error>
    where
        Di: Deserializer<'de>,
    {
        deserializer.deserialize_struct("Array", ARRAY_FIELDS, ArrayVisitor::new())
    }
}

impl<'de> Deserialize<'de> for ArrayField {
    fn deserialize<D>(deserializer: D) -> Result<ArrayField, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArrayFieldVisitor;

        impl<'de> Visitor<'de> for ArrayFieldVisitor {
            type Value = ArrayField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(r#""v", "dim", or "data""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    "v" => Ok(ArrayField::Version),
                    "dim" => Ok(ArrayField::Dim),
                    "data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(other, ARRAY_FIELDS)),
                }
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    b"v" => Ok(ArrayField::Version),
                    b"dim" => Ok(ArrayField::Dim),
                    b"data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(
                        &String::from_utf8_lossy(other),
                        ARRAY_FIELDS,
                    )),
                }
            }
        }

        deserializer.deserialize_identifier(ArrayFieldVisitor)
    }
}

fn build_array<A, E, const D: usize>(dim: Vec<Ix>, data: Vec<A>) -> Result<Array<A, D>, E>
where
    E: de::Error,
{
    // the empty array is written with an all-zero shape
    if data.is_empty() && dim.len() == D && dim.iter().all(|&d| d == 0) {
        return Ok(Array::empty());
    }
    Array::from_shape_vec(dim, data)
        .map_err(|err| de::Error::custom(format!("data and dimension must match: {}", err)))
}

impl<'de, A, const D: usize> Visitor<'de> for ArrayVisitor<A, D>
where
    A: Deserialize<'de>,
{
    type Value = Array<A, D>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "ndlattice representation of an array of rank {}", D)
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Array<A, D>, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let v: u8 = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(0, &self));
            }
        };

        verify_version(v)?;

        let dim: Vec<Ix> = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(1, &self));
            }
        };

        let data: Vec<A> = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(2, &self));
            }
        };

        build_array(dim, data)
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<Array<A, D>, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut v: Option<u8> = None;
        let mut data: Option<Vec<A>> = None;
        let mut dim: Option<Vec<Ix>> = None;

        while let Some(key) = visitor.next_key()? {
            match key {
                ArrayField::Version => {
                    let val = visitor.next_value()?;
                    verify_version(val)?;
                    v = Some(val);
                }
                ArrayField::Data => {
                    data = Some(visitor.next_value()?);
                }
                ArrayField::Dim => {
                    dim = Some(visitor.next_value()?);
                }
            }
        }

        if v.is_none() {
            return Err(de::Error::missing_field("v"));
        }

        let data = match data {
            Some(data) => data,
            None => return Err(de::Error::missing_field("data")),
        };

        let dim = match dim {
            Some(dim) => dim,
            None => return Err(de::Error::missing_field("dim")),
        };

        build_array(dim, data)
    }
}

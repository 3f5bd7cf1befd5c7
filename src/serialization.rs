use std::marker::PhantomData;

use serde::de::{DeserializeSeed, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserializer, Serialize, Serializer};

///
/// Deserializes a sequence, passing each element to `collector` as soon as it
/// has been deserialized using `base_seed`.
///
#[stability::unstable(feature = "enable")]
pub fn deserialize_seq_helper<'de, S, D, C>(deserializer: D, collector: C, base_seed: S) -> Result<(), D::Error>
    where D: Deserializer<'de>,
        C: FnMut(S::Value),
        S: Clone + DeserializeSeed<'de>
{
    struct SeqVisitor<'de, S: Clone + DeserializeSeed<'de>, C: FnMut(S::Value)> {
        base_seed: S,
        collector: C,
        deserializer: PhantomData<&'de ()>
    }

    impl<'de, S: Clone + DeserializeSeed<'de>, C: FnMut(S::Value)> Visitor<'de> for SeqVisitor<'de, S, C> {
        type Value = ();

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(formatter, "a sequence")
        }

        fn visit_seq<A>(mut self, mut seq: A) -> Result<Self::Value, A::Error>
            where A: serde::de::SeqAccess<'de>
        {
            while let Some(el) = seq.next_element_seed(self.base_seed.clone())? {
                (self.collector)(el);
            }
            return Ok(());
        }
    }

    deserializer.deserialize_seq(SeqVisitor {
        deserializer: PhantomData,
        base_seed: base_seed,
        collector: collector
    })
}

///
/// Deserializes a sequence of exactly `N` elements into an array.
///
/// Sequences of any other length are rejected with [`serde::de::Error::invalid_length()`].
///
#[stability::unstable(feature = "enable")]
pub fn deserialize_array_helper<'de, T, D, const N: usize>(deserializer: D) -> Result<[T; N], D::Error>
    where D: Deserializer<'de>,
        T: serde::Deserialize<'de>
{
    let mut elements = Vec::with_capacity(N);
    deserialize_seq_helper(deserializer, |x| elements.push(x), PhantomData::<T>)?;
    let len = elements.len();
    return elements.try_into().map_err(|_| <D::Error as serde::de::Error>::invalid_length(len, &ExpectedLength(N)));
}

struct ExpectedLength(usize);

impl serde::de::Expected for ExpectedLength {

    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a sequence of length {}", self.0)
    }
}

///
/// Serializes the elements of the iterator as a sequence, with known length if
/// the iterator reports an exact size hint.
///
#[stability::unstable(feature = "enable")]
pub fn serialize_seq_helper<S, I>(serializer: S, sequence: I) -> Result<S::Ok, S::Error>
    where S: Serializer,
        I: Iterator,
        I::Item: Serialize
{
    let size_hint = sequence.size_hint();
    let mut seq = serializer.serialize_seq(if size_hint.1 == Some(size_hint.0) { Some(size_hint.0) } else { None })?;
    for x in sequence {
        seq.serialize_element(&x)?;
    }
    return seq.end();
}

#[test]
fn test_deserialize_array() {
    let mut deserializer = serde_json::Deserializer::from_str("[1.5, 2.0, -3.0]");
    let result: [f64; 3] = deserialize_array_helper(&mut deserializer).unwrap();
    assert_eq!([1.5, 2., -3.], result);

    let mut deserializer = serde_json::Deserializer::from_str("[1.5, 2.0]");
    let result: Result<[f64; 3], _> = deserialize_array_helper(&mut deserializer);
    assert!(result.is_err());
}

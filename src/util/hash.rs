use std::hash::{BuildHasher, Hasher};

/// A hasher that maps every value to the same bucket, forcing all elements
/// into collisions.
#[derive(Debug)]
#[allow(unused)]
pub struct ZeroHasher;

impl Hasher for ZeroHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

#[derive(Debug, Default)]
#[allow(unused)]
pub struct ZeroHasherBuilder;

impl BuildHasher for ZeroHasherBuilder {
    type Hasher = ZeroHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ZeroHasher
    }
}

use rustc_hash::FxHashMap;
use std::io::{self, Error};

/// Dictionary capacity used when none is given.
pub const DEFAULT_DICT_CAPACITY: usize = 1024;
/// Number of single byte entries seeded before any input is read.
pub const SEED_ENTRIES: usize = 256;
/// Largest capacity we accept. Indices must fit a 16 bit signed value.
pub const MAX_DICT_CAPACITY: usize = 1 << 15;

/// LZW string table stored as an arena. Every learned entry is a known entry plus one byte,
/// so we only keep (parent, byte) -> child and the reverse link for each child.
#[derive(Debug)]
pub struct Dictionary {
    children: FxHashMap<(u16, u8), u16>,
    /// Parent link of every learned entry. Entry 256 + i lives at parents[i].
    parents: Vec<(u16, u8)>,
    capacity: usize,
}

impl Dictionary {
    /// Create a dictionary holding the 256 single byte strings. Fails if the capacity
    /// cannot hold the seeds or would not fit in a 16 bit signed index.
    pub fn new(capacity: usize) -> io::Result<Self> {
        if !(SEED_ENTRIES..=MAX_DICT_CAPACITY).contains(&capacity) {
            return Err(Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Dictionary capacity {} is outside {}..={}",
                    capacity, SEED_ENTRIES, MAX_DICT_CAPACITY
                ),
            ));
        }
        let learned = capacity - SEED_ENTRIES;
        let mut children = FxHashMap::default();
        children.reserve(learned);
        Ok(Self {
            children,
            parents: Vec::with_capacity(learned),
            capacity,
        })
    }

    /// Index of a single byte string. Always present.
    #[inline(always)]
    pub fn seed(byte: u8) -> u16 {
        byte as u16
    }

    /// Index of the string `parent` + `byte`, if we have learned it.
    #[inline(always)]
    pub fn child(&self, parent: u16, byte: u8) -> Option<u16> {
        self.children.get(&(parent, byte)).copied()
    }

    /// Learn `parent` + `byte` at the next free index. Once the dictionary is full this
    /// does nothing and returns None.
    pub fn insert(&mut self, parent: u16, byte: u8) -> Option<u16> {
        if self.is_full() {
            return None;
        }
        let idx = self.len() as u16;
        self.children.insert((parent, byte), idx);
        self.parents.push((parent, byte));
        Some(idx)
    }

    /// Number of entries, seeds included.
    pub fn len(&self) -> usize {
        SEED_ENTRIES + self.parents.len()
    }

    /// Never true, the seeds are always there.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Number of entries learned from the input (everything past the seeds).
    pub fn learned(&self) -> usize {
        self.parents.len()
    }

    /// Rebuild the bytes an index stands for. None if the index has not been assigned.
    pub fn expand(&self, idx: u16) -> Option<Vec<u8>> {
        if idx as usize >= self.len() {
            return None;
        }
        let mut out = Vec::new();
        let mut cursor = idx;
        while cursor as usize >= SEED_ENTRIES {
            let (parent, byte) = self.parents[cursor as usize - SEED_ENTRIES];
            out.push(byte);
            cursor = parent;
        }
        out.push(cursor as u8);
        out.reverse();
        Some(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn seeds_test() {
        let dict = Dictionary::new(DEFAULT_DICT_CAPACITY).unwrap();
        assert_eq!(dict.len(), 256);
        assert_eq!(dict.learned(), 0);
        assert_eq!(Dictionary::seed(b'a'), 97);
        assert_eq!(dict.expand(97), Some(vec![b'a']));
        assert_eq!(dict.expand(255), Some(vec![255]));
        assert_eq!(dict.expand(256), None);
    }

    #[test]
    fn insert_and_expand_test() {
        let mut dict = Dictionary::new(DEFAULT_DICT_CAPACITY).unwrap();
        let ab = dict.insert(Dictionary::seed(b'a'), b'b').unwrap();
        let abc = dict.insert(ab, b'c').unwrap();
        assert_eq!(ab, 256);
        assert_eq!(abc, 257);
        assert_eq!(dict.child(97, b'b'), Some(256));
        assert_eq!(dict.child(256, b'c'), Some(257));
        assert_eq!(dict.child(256, b'd'), None);
        assert_eq!(dict.expand(abc), Some(b"abc".to_vec()));
    }

    #[test]
    fn saturation_test() {
        let mut dict = Dictionary::new(258).unwrap();
        assert_eq!(dict.insert(1, 2), Some(256));
        assert_eq!(dict.insert(1, 3), Some(257));
        assert!(dict.is_full());
        assert_eq!(dict.insert(1, 4), None);
        assert_eq!(dict.len(), 258);
        // Entries learned before saturation still match
        assert_eq!(dict.child(1, 3), Some(257));
        assert_eq!(dict.child(1, 4), None);
    }

    #[test]
    fn seed_only_capacity_test() {
        let mut dict = Dictionary::new(256).unwrap();
        assert!(dict.is_full());
        assert_eq!(dict.insert(0, 0), None);
    }

    #[test]
    fn bad_capacity_test() {
        let err = Dictionary::new(255).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(Dictionary::new(MAX_DICT_CAPACITY + 1).is_err());
        assert!(Dictionary::new(MAX_DICT_CAPACITY).is_ok());
    }
}

use std::fmt::{Display, Formatter};
use std::io::{self, Error};
use std::str::FromStr;

use crate::tools::freq_count::FreqTable;

/// One Huffman code, root to leaf. Displays (and parses) as a string of '0' and '1'.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits are collected leaf to root while the tree is built; flip them around.
    pub(crate) fn reverse(&mut self) {
        self.bits.reverse();
    }

    /// True if self is a prefix of (or equal to) other.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Bad character {:?} in code {:?}", other, s),
                )),
            })
            .collect::<Result<Vec<bool>, Error>>()
            .map(|bits| Code { bits })
    }
}

/// Codes for every dictionary index that was used. Unused indices have no code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Empty table for a dictionary of `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            codes: vec![None; capacity],
        }
    }

    /// Set the code for `idx`, growing the table if needed.
    pub fn insert(&mut self, idx: u16, code: Code) {
        if idx as usize >= self.codes.len() {
            self.codes.resize(idx as usize + 1, None);
        }
        self.codes[idx as usize] = Some(code);
    }

    pub fn get(&self, idx: u16) -> Option<&Code> {
        self.codes.get(idx as usize).and_then(|c| c.as_ref())
    }

    /// Number of indices that have a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }

    /// Iterate (index, code) in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|c| (i as u16, c)))
    }

    /// Longest code in the table, 0 for an empty table.
    pub fn max_len(&self) -> usize {
        self.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }

    /// Total bits needed to code every occurrence counted in `freqs`.
    pub fn weighted_length(&self, freqs: &FreqTable) -> u64 {
        self.iter()
            .map(|(i, c)| freqs.get(i) * c.len() as u64)
            .sum()
    }

    /// Check that no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes = self.iter().map(|(_, c)| c).collect::<Vec<_>>();
        // After sorting, a prefix always sorts right before something it prefixes.
        codes.sort_unstable_by(|a, b| a.bits().cmp(b.bits()));
        codes.windows(2).all(|w| !w[0].is_prefix_of(w[1]))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn table(entries: &[(u16, &str)]) -> CodeTable {
        let mut t = CodeTable::new(16);
        for (idx, code) in entries {
            t.insert(*idx, code.parse().unwrap());
        }
        t
    }

    #[test]
    fn code_parse_and_display_test() {
        let code: Code = "0110".parse().unwrap();
        assert_eq!(code.bits(), &[false, true, true, false]);
        assert_eq!(code.to_string(), "0110");
        assert_eq!(code.len(), 4);
        assert!("01x".parse::<Code>().is_err());
        assert!("".parse::<Code>().unwrap().is_empty());
    }

    #[test]
    fn prefix_test() {
        let a: Code = "01".parse().unwrap();
        let b: Code = "011".parse().unwrap();
        assert!(a.is_prefix_of(&b));
        assert!(!b.is_prefix_of(&a));
        assert!(a.is_prefix_of(&a));
    }

    #[test]
    fn prefix_free_test() {
        assert!(table(&[(0, "0"), (1, "10"), (2, "11")]).is_prefix_free());
        assert!(!table(&[(0, "1"), (1, "10"), (2, "0")]).is_prefix_free());
        // Not adjacent by index, adjacent once sorted
        assert!(!table(&[(0, "110"), (5, "0"), (9, "11")]).is_prefix_free());
    }

    #[test]
    fn table_accessors_test() {
        let t = table(&[(2, "11"), (0, "0"), (1, "10")]);
        assert_eq!(t.len(), 3);
        assert!(!t.is_empty());
        assert_eq!(t.get(1).unwrap().to_string(), "10");
        assert_eq!(t.get(3), None);
        assert_eq!(t.get(100), None);
        assert_eq!(t.max_len(), 2);
        let order = t.iter().map(|(i, _)| i).collect::<Vec<_>>();
        assert_eq!(order, vec![0, 1, 2]);
        assert!(CodeTable::new(8).is_empty());
    }

    #[test]
    fn insert_grows_test() {
        let mut t = CodeTable::new(2);
        t.insert(40, "1".parse().unwrap());
        assert_eq!(t.get(40).unwrap().len(), 1);
    }

    #[test]
    fn weighted_length_test() {
        let t = table(&[(0, "0"), (1, "10"), (2, "11")]);
        let f = crate::tools::freq_count::freqs(&[0, 0, 0, 1, 2, 2], 16);
        assert_eq!(t.weighted_length(&f), 3 + 2 + 4);
    }
}

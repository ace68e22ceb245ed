//! Per-vertex scratch counters with touched-slot tracking

use crate::census::Count;

/// Dense per-vertex counter array that remembers which slots it wrote.
///
/// Counting routines fill it around one pivot vertex and must hand it back
/// all-zero. `clear` only revisits the touched slots, so a reset costs as much
/// as the fill did rather than the vertex count.
#[derive(Debug, Clone)]
pub struct VertexScratch {
    values: Vec<Count>,
    touched: Vec<u32>,
}

impl VertexScratch {
    pub fn new(node_count: usize) -> Self {
        Self {
            values: vec![0; node_count],
            touched: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Increment the counter of `v`
    #[inline]
    pub fn bump(&mut self, v: u32) {
        let slot = &mut self.values[v as usize];
        if *slot == 0 {
            self.touched.push(v);
        }
        *slot += 1;
    }

    #[inline]
    pub fn get(&self, v: u32) -> Count {
        self.values[v as usize]
    }

    /// Read the counter of `v` and reset it to zero
    #[inline]
    pub fn take(&mut self, v: u32) -> Count {
        std::mem::take(&mut self.values[v as usize])
    }

    /// Vertices written since the last clear, in first-touch order.
    ///
    /// A vertex whose counter was taken stays listed; its value reads 0.
    pub fn touched(&self) -> &[u32] {
        &self.touched
    }

    /// Zero every touched slot
    pub fn clear(&mut self) {
        for &v in &self.touched {
            self.values[v as usize] = 0;
        }
        self.touched.clear();
    }

    /// Whether every counter is zero. Linear in the vertex count; meant for
    /// assertions.
    pub fn is_clean(&self) -> bool {
        self.touched.is_empty() && self.values.iter().all(|&x| x == 0)
    }

    /// Resize for a graph with a different vertex count, keeping it clean
    pub fn reset(&mut self, node_count: usize) {
        self.clear();
        self.values.resize(node_count, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_records_first_touch_only() {
        let mut scratch = VertexScratch::new(5);
        scratch.bump(3);
        scratch.bump(1);
        scratch.bump(3);

        assert_eq!(scratch.get(3), 2);
        assert_eq!(scratch.touched(), &[3, 1]);
    }

    #[test]
    fn test_clear_only_resets_touched() {
        let mut scratch = VertexScratch::new(4);
        scratch.bump(2);
        scratch.bump(2);
        scratch.clear();

        assert!(scratch.is_clean());
        assert_eq!(scratch.get(2), 0);
    }

    #[test]
    fn test_take_zeroes_but_keeps_listing() {
        let mut scratch = VertexScratch::new(3);
        scratch.bump(0);
        assert_eq!(scratch.take(0), 1);
        assert_eq!(scratch.take(0), 0);
        assert!(!scratch.is_clean());

        // A re-bump after take must register the slot again
        scratch.bump(0);
        assert_eq!(scratch.touched(), &[0, 0]);
        scratch.clear();
        assert!(scratch.is_clean());
    }

    #[test]
    fn test_reset_resizes() {
        let mut scratch = VertexScratch::new(2);
        scratch.bump(1);
        scratch.reset(6);
        assert_eq!(scratch.len(), 6);
        assert!(scratch.is_clean());
    }
}

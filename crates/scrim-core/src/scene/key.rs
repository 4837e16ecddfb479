use super::ZIndex;

/// Composite ordering key: layer first, insertion order within a layer.
///
/// Field order is load-bearing: deriving `Ord` compares `z` before
/// `order`, which is exactly back-to-front paint order. Equal-z items
/// keep their insertion order, so paint-order sorting never reshuffles
/// commands pushed into the same layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_dominates_insertion_order() {
        let back = SortKey::new(ZIndex::new(0), 7);
        let front = SortKey::new(ZIndex::new(3), 0);
        assert!(back < front);
    }

    #[test]
    fn same_layer_falls_back_to_insertion_order() {
        let first = SortKey::new(ZIndex::new(3), 1);
        let second = SortKey::new(ZIndex::new(3), 2);
        assert!(first < second);
        assert!(SortKey::new(ZIndex::new(3), 1) <= first);
    }
}

//! Property-based invariant tests for gridmark-core.
//!
//! These tests verify structural invariants that must hold for any input:
//!
//! 1. Every structural grid operation keeps `len == width * height`.
//! 2. Inserting rows/columns and removing them again restores the grid.
//! 3. Resizing to the current size is the identity.
//! 4. Resize keeps the overlapping top-left region.
//! 5. History behaves like a pointer into a truncating log.
//! 6. Board text form round-trips for every size below 64.
//! 7. Bit packing round-trips up to padding.

use gridmark_core::{BoardMap, Grid, History, decode_varint, encode_varint, pack_bits, unpack_bits};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn dims() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=9, 1usize..=9)
}

fn grid_strategy() -> impl Strategy<Value = Grid<u8>> {
    dims().prop_flat_map(|(w, h)| {
        proptest::collection::vec(any::<u8>(), w * h)
            .prop_map(move |cells| Grid::from_vec(cells, w, h).unwrap())
    })
}

fn board_strategy() -> impl Strategy<Value = BoardMap> {
    (1usize..64).prop_flat_map(|size| {
        proptest::collection::vec(any::<bool>(), size * size).prop_map(move |cells| {
            BoardMap::from_grid(Grid::from_vec(cells, size, size).unwrap()).unwrap()
        })
    })
}

fn assert_consistent<T>(g: &Grid<T>) {
    assert_eq!(g.len(), g.width() * g.height(), "len != width * height");
    assert_eq!(g.rows().count(), g.height());
    assert!(g.rows().all(|row| row.len() == g.width()));
}

#[derive(Debug, Clone)]
enum HistoryOp {
    Set(u32),
    Undo,
    Redo,
}

fn history_op() -> impl Strategy<Value = HistoryOp> {
    prop_oneof![
        any::<u32>().prop_map(HistoryOp::Set),
        Just(HistoryOp::Undo),
        Just(HistoryOp::Redo),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Structural operations keep the row-major invariant
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn structural_ops_keep_len(
        g in grid_strategy(),
        at in -12isize..12,
        count in 0usize..6,
        fill in any::<u8>(),
    ) {
        assert_consistent(&g.insert_rows(at, count, fill));
        assert_consistent(&g.insert_cols(at, count, fill));
        assert_consistent(&g.remove_rows(at, count));
        assert_consistent(&g.remove_cols(at, count));
        assert_consistent(&g.remove_rows_from(at).remove_cols_from(at));
    }
}

proptest! {
    #[test]
    fn insertion_adds_exactly_count(
        g in grid_strategy(),
        at in -12isize..12,
        count in 0usize..6,
    ) {
        prop_assert_eq!(g.insert_rows(at, count, 0).height(), g.height() + count);
        prop_assert_eq!(g.insert_cols(at, count, 0).width(), g.width() + count);
    }
}

proptest! {
    #[test]
    fn removal_is_clamped(g in grid_strategy(), at in -12isize..12, count in 0usize..20) {
        let start = at.rem_euclid(g.height() as isize) as usize;
        let removed = g.height() - g.remove_rows(at, count).height();
        prop_assert_eq!(removed, count.min(g.height() - start));

        let start = at.rem_euclid(g.width() as isize) as usize;
        let removed = g.width() - g.remove_cols(at, count).width();
        prop_assert_eq!(removed, count.min(g.width() - start));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Insert then remove is a left inverse
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn insert_then_remove_rows_restores(g in grid_strategy(), y in 0usize..10, n in 0usize..5) {
        let y = y.min(g.height()) as isize;
        prop_assert_eq!(g.insert_rows(y, n, 7).remove_rows(y, n), g);
    }
}

proptest! {
    #[test]
    fn insert_then_remove_cols_restores(g in grid_strategy(), x in 0usize..10, n in 0usize..5) {
        let x = x.min(g.width()) as isize;
        prop_assert_eq!(g.insert_cols(x, n, 7).remove_cols(x, n), g);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Resize
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resize_same_size_is_identity(g in grid_strategy(), fill in any::<u8>()) {
        prop_assert_eq!(g.resize(g.width(), g.height(), fill), g);
    }
}

proptest! {
    #[test]
    fn resize_keeps_overlap_and_fills_rest(
        g in grid_strategy(),
        (w, h) in dims(),
        fill in any::<u8>(),
    ) {
        let r = g.resize(w, h, fill);
        prop_assert_eq!((r.width(), r.height()), (w, h));
        for y in 0..h {
            for x in 0..w {
                let expected = if x < g.width() && y < g.height() {
                    *g.get(x, y).unwrap()
                } else {
                    fill
                };
                prop_assert_eq!(*r.get(x, y).unwrap(), expected);
            }
        }
    }
}

proptest! {
    #[test]
    fn broadcast_fill_everywhere((w, h) in dims(), v in any::<u8>()) {
        let g = Grid::new(w, h, v).unwrap();
        for y in 0..h {
            for x in 0..w {
                prop_assert_eq!(*g.get(x, y).unwrap(), v);
            }
        }
    }
}

proptest! {
    #[test]
    fn with_cell_changes_only_target((w, h) in dims(), x in 0usize..9, y in 0usize..9) {
        let (x, y) = (x % w, y % h);
        let g = Grid::new(w, h, 0u8).unwrap().with_cell(x, y, 9).unwrap();
        prop_assert_eq!(*g.get(x, y).unwrap(), 9);
        prop_assert_eq!(g.data().iter().filter(|&&v| v == 9).count(), 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. History model
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn history_matches_model(ops in proptest::collection::vec(history_op(), 0..40)) {
        let mut history = History::new(0u32);
        let mut log = vec![0u32];
        let mut pointer = 0usize;

        for op in ops {
            match op {
                HistoryOp::Set(v) => {
                    history = history.set(v);
                    log.truncate(pointer + 1);
                    log.push(v);
                    pointer = log.len() - 1;
                }
                HistoryOp::Undo => {
                    history = history.undo();
                    pointer = pointer.saturating_sub(1);
                }
                HistoryOp::Redo => {
                    history = history.redo();
                    pointer = (pointer + 1).min(log.len() - 1);
                }
            }
            prop_assert_eq!(history.entries(), log.as_slice());
            prop_assert_eq!(history.pointer(), pointer);
            prop_assert_eq!(*history.get(), log[pointer]);
            prop_assert_eq!(history.can_undo(), pointer > 0);
            prop_assert_eq!(history.can_redo(), pointer + 1 < log.len());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6-7. Codec
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn board_roundtrip(board in board_strategy()) {
        let encoded = board.encode().unwrap();
        let size = board.size();
        prop_assert_eq!(encoded.len(), 1 + (size * size).div_ceil(6));
        prop_assert_eq!(BoardMap::decode(&encoded).unwrap(), board);
    }
}

proptest! {
    #[test]
    fn truncated_board_is_rejected(board in board_strategy(), cut in 1usize..4) {
        let encoded = board.encode().unwrap();
        let cut = cut.min(encoded.len() - 1);
        prop_assert!(BoardMap::decode(&encoded[..encoded.len() - cut]).is_err());
    }
}

proptest! {
    #[test]
    fn varint_roundtrip(n in any::<u64>()) {
        prop_assert_eq!(decode_varint(&encode_varint(n)).unwrap(), n);
    }
}

proptest! {
    #[test]
    fn bits_roundtrip_up_to_padding(bits in proptest::collection::vec(any::<bool>(), 0..200)) {
        let packed = pack_bits(&bits);
        let unpacked = unpack_bits(&packed).unwrap();
        prop_assert_eq!(unpacked.len(), packed.len() * 6);
        prop_assert_eq!(&unpacked[..bits.len()], bits.as_slice());
        prop_assert!(unpacked[bits.len()..].iter().all(|&b| !b));
    }
}

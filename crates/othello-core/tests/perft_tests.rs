use othello_core::perft::perft_root;
use othello_core::square::BoardSize;

const REFERENCE_COUNTS: &[(u32, u64)] = &[
    (1, 4),
    (2, 12),
    (3, 56),
    (4, 244),
    (5, 1_396),
    (6, 8_200),
    (7, 55_092),
    (8, 390_216),
];

#[test]
fn test_perft_reference_counts() {
    for &(depth, expected) in REFERENCE_COUNTS {
        assert_eq!(
            perft_root(BoardSize::default(), depth),
            expected,
            "depth {depth}"
        );
    }
}

#[test]
fn test_perft() {
    let nodes = perft_root(BoardSize::default(), 9);
    assert_eq!(nodes, 3_005_320);
}

#[test]
fn test_perft_small_board_terminates() {
    // 4x4 games end within 12 plies, so deeper searches count finished games.
    let size = BoardSize::new(4);
    assert_eq!(perft_root(size, 14), perft_root(size, 20));
}

use super::*;

#[test]
fn tiles_follow_display_order() {
    let stats = Stats { total_codes: 4, total_reviews: 7, completed_codes: 1, pending_codes: 3 };
    let tiles = stat_tiles(stats);
    assert_eq!(tiles[0], ("Total Codes", 4, "blue"));
    assert_eq!(tiles[1], ("Total Reviews", 7, "green"));
    assert_eq!(tiles[3], ("Pending Codes", 3, "orange"));
}

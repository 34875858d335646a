use dungeon_core::mapgen::seed::random_usize;
use dungeon_core::{
    Cell, Grid, Pos, connect_regions, find_regions, generate_cave, generate_random_map,
    generate_standard_map, is_connected,
};
use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

fn border_is_wall(grid: &Grid) -> bool {
    grid.positions().filter(|&pos| grid.is_border(pos)).all(|pos| grid.cell(pos) == Cell::Wall)
}

fn rows_use_only_map_glyphs(grid: &Grid) -> bool {
    let rows = grid.to_rows();
    rows.len() == grid.height()
        && rows.iter().all(|row| {
            row.chars().count() == grid.width()
                && row.chars().all(|glyph| glyph == '#' || glyph == ' ')
        })
}

#[test]
fn standard_maps_hold_every_invariant() {
    for seed in 0..100 {
        let grid = generate_standard_map(&mut ChaCha8Rng::seed_from_u64(seed));
        assert_eq!((grid.width(), grid.height()), (20, 10));
        assert!(border_is_wall(&grid), "seed={seed}");
        assert!(is_connected(&grid), "seed={seed}");
        assert!(rows_use_only_map_glyphs(&grid));
    }
}

#[test]
fn large_caves_meet_the_open_ratio() {
    for seed in 0..20 {
        let grid = generate_cave(30, 30, Some(seed)).expect("valid size");
        let required = (grid.interior_area() as f64 * 0.4) as usize;
        assert!(
            grid.interior_open_count() >= required,
            "seed={seed}: {} of {} interior cells open",
            grid.interior_open_count(),
            grid.interior_area()
        );
    }
}

#[test]
fn ui_size_bounds_generate_valid_caves() {
    for (width, height) in [(10, 10), (50, 10), (10, 50), (50, 50)] {
        let grid = generate_cave(width, height, Some(77)).expect("valid size");
        assert!(border_is_wall(&grid));
        assert!(is_connected(&grid));
        assert!(rows_use_only_map_glyphs(&grid));
    }
}

#[test]
fn two_separated_rooms_fixture() {
    let grid = Grid::from_rows(&[
        "#########",
        "#   #   #",
        "#   #   #",
        "#   #   #",
        "#########",
    ]);
    assert!(!is_connected(&grid));
    let regions = find_regions(&grid);
    assert_eq!(regions.iter().map(|region| region.len()).collect::<Vec<_>>(), [9, 9]);

    let repaired = connect_regions(grid);
    assert!(is_connected(&repaired));
    assert_eq!(find_regions(&repaired).len(), 1);
}

#[test]
fn scattered_pockets_converge_to_one_region() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut grid = Grid::new(40, 25);
    for _ in 0..60 {
        let x = random_usize(&mut rng, 1, 38) as i32;
        let y = random_usize(&mut rng, 1, 23) as i32;
        grid.set(Pos::new(x, y), Cell::Open);
    }
    let before = find_regions(&grid).len();
    assert!(before >= 2);

    let repaired = connect_regions(grid.clone());
    assert!(is_connected(&repaired));
    assert!(border_is_wall(&repaired));
    assert!(grid.positions().filter(|&pos| grid.is_open(pos)).all(|pos| repaired.is_open(pos)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn caves_are_sealed_and_connected(
        seed in any::<u64>(),
        width in 10_usize..=50,
        height in 10_usize..=50,
    ) {
        let grid = generate_random_map(width, height, &mut ChaCha8Rng::seed_from_u64(seed))
            .expect("valid size");
        prop_assert_eq!((grid.width(), grid.height()), (width, height));
        prop_assert!(border_is_wall(&grid), "seed={seed} {width}x{height}");
        prop_assert!(is_connected(&grid), "seed={seed} {width}x{height}");
        prop_assert_eq!(is_connected(&grid), is_connected(&grid));
    }

    #[test]
    fn fixed_seed_caves_are_reproducible(seed in any::<u64>()) {
        let first = generate_cave(24, 16, Some(seed)).expect("valid size");
        let second = generate_cave(24, 16, Some(seed)).expect("valid size");
        prop_assert_eq!(first, second);
    }
}

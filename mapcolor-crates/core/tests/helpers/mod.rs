#![allow(dead_code, reason = "not every test binary uses every helper")]

use mapcolor_core::results::Coloring;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

/// The mainland states and territories of Australia plus Tasmania, which has no neighbours.
pub const AUSTRALIA_REGIONS: [&str; 7] = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];

const AUSTRALIA_BORDERS: [(usize, usize); 9] = [
    (0, 1),
    (0, 2),
    (1, 2),
    (1, 3),
    (2, 3),
    (2, 4),
    (2, 5),
    (3, 4),
    (4, 5),
];

pub const PALETTE: [&str; 4] = ["red", "green", "blue", "yellow"];

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn australia() -> Vec<Vec<u8>> {
    matrix_from_edges(AUSTRALIA_REGIONS.len(), &AUSTRALIA_BORDERS)
}

pub fn triangle() -> Vec<Vec<u8>> {
    matrix_from_edges(3, &[(0, 1), (1, 2), (0, 2)])
}

pub fn matrix_from_edges(num_regions: usize, edges: &[(usize, usize)]) -> Vec<Vec<u8>> {
    let mut matrix = vec![vec![0; num_regions]; num_regions];
    for &(first, second) in edges {
        matrix[first][second] = 1;
        matrix[second][first] = 1;
    }
    matrix
}

/// Generates a symmetric matrix in which every pair of distinct regions is adjacent with the
/// provided probability.
pub fn random_matrix(rng: &mut SmallRng, num_regions: usize, density: f64) -> Vec<Vec<u8>> {
    let edges = (0..num_regions)
        .flat_map(|first| (first + 1..num_regions).map(move |second| (first, second)))
        .filter(|_| rng.gen_bool(density))
        .collect::<Vec<_>>();
    matrix_from_edges(num_regions, &edges)
}

pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

pub fn region_names(num_regions: usize) -> Vec<String> {
    (0..num_regions).map(|index| format!("R{index}")).collect()
}

/// Checks that every region received a color of the palette and that adjacent regions received
/// different colors.
pub fn assert_valid_coloring(
    coloring: &Coloring<'_>,
    matrix: &[Vec<u8>],
    regions: &[&str],
    palette: &[&str],
) {
    assert_eq!(coloring.len(), regions.len());

    for (row, region) in regions.iter().enumerate() {
        let color = coloring
            .color_of(region)
            .unwrap_or_else(|| panic!("{region} is not colored"));
        assert!(palette.contains(&color), "{region} has unknown color {color}");

        for (column, neighbour) in regions.iter().enumerate() {
            if row != column && matrix[row][column] != 0 {
                assert_ne!(
                    coloring.color_of(neighbour),
                    Some(color),
                    "{region} and {neighbour} are adjacent but both {color}"
                );
            }
        }
    }
}

/// Decides colorability by enumerating all assignments; only usable for small instances.
pub fn brute_force_colorable(matrix: &[Vec<u8>], num_colors: usize) -> bool {
    let num_regions = matrix.len();
    if num_regions == 0 {
        return true;
    }
    if num_colors == 0 {
        return false;
    }

    let mut colors = vec![0; num_regions];
    loop {
        let valid = (0..num_regions).all(|row| {
            (row + 1..num_regions)
                .all(|column| matrix[row][column] == 0 || colors[row] != colors[column])
        });
        if valid {
            return true;
        }

        // Advance to the next assignment, counting in base `num_colors`.
        let mut position = 0;
        loop {
            if position == num_regions {
                return false;
            }
            colors[position] += 1;
            if colors[position] < num_colors {
                break;
            }
            colors[position] = 0;
            position += 1;
        }
    }
}

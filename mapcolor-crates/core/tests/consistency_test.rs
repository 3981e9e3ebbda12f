mod helpers;

use helpers::assert_valid_coloring;
use helpers::brute_force_colorable;
use helpers::init_logging;
use helpers::random_matrix;
use helpers::region_names;
use helpers::seeded_rng;
use helpers::PALETTE;
use mapcolor_core::options::SolverOptions;
use mapcolor_core::Solver;

/// Every combination of propagation and ordering agrees with exhaustive enumeration on small
/// random maps, and every coloring it reports is valid.
#[test]
fn all_variants_agree_on_random_maps() {
    init_logging();
    let mut rng = seeded_rng(42);

    for num_regions in 1..=8 {
        for density in [0.3, 0.5, 0.8] {
            let matrix = random_matrix(&mut rng, num_regions, density);
            let names = region_names(num_regions);
            let regions = names.iter().map(String::as_str).collect::<Vec<_>>();

            for num_colors in 1..=4 {
                let palette = &PALETTE[..num_colors];
                let expected = brute_force_colorable(&matrix, num_colors);

                for options in SolverOptions::all() {
                    let mut solver = Solver::new(&matrix, &regions, palette, options);
                    let result = solver.solve();

                    assert_eq!(
                        result.is_colored(),
                        expected,
                        "{options} with {num_colors} colors on {matrix:?}"
                    );
                    if let Some(coloring) = result.coloring() {
                        assert_valid_coloring(coloring, &matrix, &regions, palette);
                    }
                }
            }
        }
    }
}

/// Propagation never makes the search explore more candidates on the same ordering.
#[test]
fn forward_checking_does_not_increase_backtracks_in_input_order() {
    use mapcolor_core::options::PropagationLevel;
    use mapcolor_core::options::VariableOrdering;

    let mut rng = seeded_rng(7);

    for _ in 0..20 {
        let matrix = random_matrix(&mut rng, 8, 0.5);
        let names = region_names(8);
        let regions = names.iter().map(String::as_str).collect::<Vec<_>>();

        let backtracks = |propagation| {
            let options = SolverOptions::new(propagation, VariableOrdering::InputOrder);
            let mut solver = Solver::new(&matrix, &regions, &PALETTE[..3], options);
            let _ = solver.solve();
            solver.num_backtracks()
        };

        assert!(
            backtracks(PropagationLevel::ForwardChecking) <= backtracks(PropagationLevel::None),
            "{matrix:?}"
        );
    }
}

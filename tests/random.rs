use burrow_sat::{
    config::Config, context::Context, generic::random::MinimalPCG32, structures::literal::Lit,
};
use rand::{Rng, SeedableRng};

/// A clause as (atom index, polarity) pairs.
type Clause = Vec<(usize, bool)>;

fn random_formula(rng: &mut MinimalPCG32, atoms: usize, clauses: usize) -> Vec<Clause> {
    (0..clauses)
        .map(|_| {
            (0..3)
                .map(|_| (rng.random_range(0..atoms), rng.random_bool(0.5)))
                .collect()
        })
        .collect()
}

fn satisfies(formula: &[Clause], valuation: &[bool]) -> bool {
    formula.iter().all(|clause| {
        clause
            .iter()
            .any(|(atom, polarity)| valuation[*atom] == *polarity)
    })
}

/// Satisfiability by enumeration of every valuation, with some atoms fixed.
fn brute_force(formula: &[Clause], atoms: usize, fixed: &[(usize, bool)]) -> bool {
    (0..1_u32 << atoms).any(|bits| {
        let valuation = (0..atoms).map(|i| bits & (1 << i) != 0).collect::<Vec<_>>();
        fixed.iter().all(|(atom, value)| valuation[*atom] == *value) && satisfies(formula, &valuation)
    })
}

fn to_lits(lits: &[Lit], clause: &Clause) -> Vec<Lit> {
    clause
        .iter()
        .map(|(atom, polarity)| if *polarity { lits[*atom] } else { -lits[*atom] })
        .collect()
}

mod random {

    use super::*;

    fn agrees_with_brute_force(config: Config, seed: u64) {
        let mut rng = MinimalPCG32::seed_from_u64(seed);
        let atoms = 8;

        for _ in 0..40 {
            let clause_count = rng.random_range(20..44);
            let formula = random_formula(&mut rng, atoms, clause_count);

            let mut the_context = Context::from_config(config.clone());
            let lits = the_context.fresh_literals(atoms).unwrap();
            for clause in &formula {
                assert!(the_context.add_clause(&to_lits(&lits, clause)).is_ok());
            }

            let expected = brute_force(&formula, atoms, &[]);
            assert_eq!(the_context.solve(&[]), Ok(expected));

            if expected {
                let model = lits
                    .iter()
                    .map(|lit| the_context.value(*lit).unwrap())
                    .collect::<Vec<_>>();
                assert!(satisfies(&formula, &model));
            }

            // Incremental solves under assumptions, on the same context.
            for _ in 0..4 {
                let fixed = (0..2)
                    .map(|_| (rng.random_range(0..atoms), rng.random_bool(0.5)))
                    .collect::<Vec<_>>();
                let assumptions = to_lits(&lits, &fixed);

                let expected = brute_force(&formula, atoms, &fixed);
                assert_eq!(the_context.solve(&assumptions), Ok(expected));

                if !expected && !the_context.is_inconsistent() {
                    let failed = the_context.failed_assumptions().unwrap();
                    assert!(failed.iter().all(|lit| assumptions.contains(lit)));
                    assert_eq!(the_context.solve(&failed), Ok(false));
                }
            }

            assert_eq!(the_context.solve(&[]), Ok(brute_force(&formula, atoms, &[])));
        }
    }

    #[test]
    fn default_configuration() {
        agrees_with_brute_force(Config::default(), 0);
    }

    #[test]
    fn frequent_restarts_and_reductions() {
        let config =
            Config::from_args(&["--luby_u=1 --reduction_interval=1 --lbd_bound=0"]).unwrap();
        agrees_with_brute_force(config, 1);
    }

    #[test]
    fn random_decisions() {
        let config = Config::from_args(&[
            "--random_decision_bias=0.3 --polarity_lean=0.7 --phase_saving=false --seed=5",
            "--vsids=Chaff --minimization=None",
        ])
        .unwrap();
        agrees_with_brute_force(config, 2);
    }
}

use burrow_sat::{
    config::Config,
    context::Context,
    engine_version,
    reports::Report,
    structures::literal::Lit,
    types::err::{ErrorKind, StateError},
};

mod incremental {

    use super::*;

    #[test]
    fn constants_and_empty_assertions() {
        let mut the_context = Context::default();
        assert_eq!(the_context.solve(&[]), Ok(true));
        assert_eq!(the_context.solve(&[Lit::TRUE]), Ok(true));
        assert_eq!(the_context.solve(&[Lit::FALSE]), Ok(false));
        assert_eq!(the_context.solve(&[Lit::TRUE, Lit::FALSE]), Ok(false));

        assert!(the_context.assert_and(&[]).is_ok());
        assert_eq!(the_context.solve(&[]), Ok(true));

        assert!(the_context.assert_or(&[]).is_ok());
        assert_eq!(the_context.solve(&[]), Ok(false));
    }

    #[test]
    fn clauses_between_solves() {
        let mut the_context = Context::default();
        let [a, b, c, d] = [0; 4].map(|_| the_context.fresh_literal().unwrap());

        assert!(the_context.add_clause(&[a]).is_ok());
        assert!(the_context.add_clause(&[a, -b]).is_ok());
        assert!(the_context.add_clause(&[-a, b, c]).is_ok());
        assert!(the_context.add_clause(&[-a, b, c, -d]).is_ok());
        assert_eq!(the_context.solve(&[]), Ok(true));

        assert!(the_context.add_clause(&[a, -b, -c, d]).is_ok());
        assert_eq!(the_context.solve(&[]), Ok(true));

        assert_eq!(the_context.value(a), Ok(true));
        assert!(the_context.value(b).unwrap() || the_context.value(c).unwrap());
    }

    #[test]
    fn at_most_one_between_solves() {
        let mut the_context = Context::default();
        let [a, b, c] = [0; 3].map(|_| the_context.fresh_literal().unwrap());
        let _ = the_context.xnor(&[a, b, c]).unwrap();
        assert_eq!(the_context.solve(&[]), Ok(true));

        assert!(the_context.add_at_most_one(&[]).is_ok());
        assert_eq!(the_context.solve(&[]), Ok(true));

        assert!(the_context.add_at_most_one(&[a]).is_ok());
        assert_eq!(the_context.solve(&[]), Ok(true));
        assert_eq!(the_context.solve(&[a]), Ok(true));
        assert_eq!(the_context.solve(&[-a]), Ok(true));

        assert!(the_context.add_at_most_one(&[a, b]).is_ok());
        assert_eq!(the_context.solve(&[]), Ok(true));
        assert_eq!(the_context.solve(&[a]), Ok(true));
        assert_eq!(the_context.solve(&[-a, -b]), Ok(true));
        assert_eq!(the_context.solve(&[a, b]), Ok(false));
        assert_eq!(the_context.solve(&[b]), Ok(true));
    }

    #[test]
    fn literal_enumeration() {
        let mut the_context = Context::default();
        assert_eq!(the_context.literals().unwrap().len(), 1);

        let [a, b, c, d] = [0; 4].map(|_| the_context.fresh_literal().unwrap());
        assert_eq!(the_context.literals().unwrap().len(), 5);

        assert!(the_context.add_clause(&[a]).is_ok());
        assert!(the_context.add_clause(&[a, -b]).is_ok());
        assert!(the_context.add_clause(&[-a, b, c]).is_ok());
        assert!(the_context.add_clause(&[-a, b, c, -d]).is_ok());
        assert_eq!(the_context.solve(&[]), Ok(true));
        assert!(the_context.add_clause(&[a, -b, -c, d]).is_ok());
        assert_eq!(the_context.solve(&[]), Ok(true));

        let literals = the_context.literals().unwrap();
        assert_eq!(literals.len(), 5);
        assert_eq!(
            literals.clone().collect::<Vec<_>>(),
            vec![Lit::TRUE, a, b, c, d]
        );
        for literal in literals {
            assert!(the_context.value(literal).is_ok());
        }
    }

    #[test]
    fn repeated_solves_agree() {
        let mut the_context = Context::default();
        let lits = the_context.fresh_literals(6).unwrap();
        for window in lits.windows(3) {
            assert!(the_context.add_clause(&[-window[0], window[1], -window[2]]).is_ok());
            assert!(the_context.add_clause(&[window[0], -window[1], window[2]]).is_ok());
        }

        let first = the_context.solve(&[lits[0], -lits[5]]);
        for _ in 0..4 {
            assert_eq!(the_context.solve(&[lits[0], -lits[5]]), first);
        }
    }

    #[test]
    fn learnt_clauses_persist() {
        let mut the_context = Context::default();
        let lits = the_context.fresh_literals(3).unwrap();
        for (i, j) in [(0, 1), (1, 2), (0, 2)] {
            assert!(the_context.add_clause(&[lits[i], lits[j]]).is_ok());
            assert!(the_context.add_clause(&[-lits[i], -lits[j]]).is_ok());
        }

        assert_eq!(the_context.solve(&[]), Ok(false));
        assert!(the_context.counters().total_conflicts > 0);
        assert_eq!(the_context.solve(&[]), Ok(false));
    }

    #[test]
    fn conflict_limit_interrupts() {
        let mut config = Config::default();
        config.conflict_limit.value = 1;
        let mut the_context = Context::from_config(config);

        // Pigeonhole: four pigeons, three holes.
        let holes = 3;
        let pigeons = (0..holes + 1)
            .map(|_| the_context.fresh_literals(holes).unwrap())
            .collect::<Vec<_>>();
        for pigeon in &pigeons {
            assert!(the_context.add_clause(pigeon).is_ok());
        }
        for hole in 0..holes {
            let column = pigeons.iter().map(|pigeon| pigeon[hole]).collect::<Vec<_>>();
            assert!(the_context.add_at_most_one(&column).is_ok());
        }

        assert!(the_context.solve(&[]).is_err());
        assert!(!the_context.is_inconsistent());
        assert!(the_context.value(pigeons[0][0]).is_err());
    }

    #[test]
    fn time_limit_interrupts() {
        let mut config = Config::default();
        config.time_limit.value = std::time::Duration::from_nanos(1);
        let mut the_context = Context::from_config(config);

        // Pigeonhole: ten pigeons, nine holes.
        let holes = 9;
        let pigeons = (0..holes + 1)
            .map(|_| the_context.fresh_literals(holes).unwrap())
            .collect::<Vec<_>>();
        for pigeon in &pigeons {
            assert!(the_context.add_clause(pigeon).is_ok());
        }
        for hole in 0..holes {
            let column = pigeons.iter().map(|pigeon| pigeon[hole]).collect::<Vec<_>>();
            assert!(the_context.add_at_most_one(&column).is_ok());
        }

        assert_eq!(the_context.solve(&[]), Err(ErrorKind::Interrupted));
        assert_eq!(the_context.solve_given(&[]), Ok(Report::Unknown));
        assert!(!the_context.is_inconsistent());
        assert_eq!(
            the_context.value(pigeons[0][0]),
            Err(ErrorKind::State(StateError::NoModel))
        );
    }

    #[test]
    fn terminate_callback() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();
        the_context.set_callback_terminate(Box::new(|| true));

        assert!(the_context.solve(&[]).is_err());
        assert!(the_context.value(p).is_err());

        the_context.clear_callback_terminate();
        assert_eq!(the_context.solve(&[p]), Ok(true));
    }

    #[test]
    fn version() {
        assert!(!engine_version().is_empty());
        assert!(engine_version().starts_with("burrow_sat"));
    }
}

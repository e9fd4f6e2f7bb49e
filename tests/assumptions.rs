use burrow_sat::{context::Context, reports::Report, structures::literal::Lit};

mod assumptions {

    use super::*;

    #[test]
    fn assumption() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();
        let q = the_context.fresh_literal().unwrap();

        assert!(the_context.add_clause(&[p, q]).is_ok());

        assert_eq!(the_context.solve(&[-p]), Ok(true));
        assert_eq!(the_context.value(p), Ok(false));
        assert_eq!(the_context.value(q), Ok(true));
    }

    #[test]
    fn assumptions_do_not_persist() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();
        let q = the_context.fresh_literal().unwrap();

        assert!(the_context.add_clause(&[-p, q]).is_ok());

        assert_eq!(the_context.solve(&[p, -q]), Ok(false));
        assert!(!the_context.is_inconsistent());

        assert_eq!(the_context.solve(&[]), Ok(true));
        assert_eq!(the_context.solve(&[-q]), Ok(true));
        assert_eq!(the_context.value(p), Ok(false));
        assert_eq!(the_context.solve(&[p]), Ok(true));
        assert_eq!(the_context.value(q), Ok(true));
    }

    #[test]
    fn contradictory_assumptions() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();

        assert_eq!(the_context.solve_given(&[p, -p]), Ok(Report::Unsatisfiable));

        let mut failed = the_context.failed_assumptions().unwrap();
        failed.sort();
        let mut expected = vec![p, -p];
        expected.sort();
        assert_eq!(failed, expected);

        assert_eq!(the_context.solve(&[p]), Ok(true));
    }

    #[test]
    fn false_constant_assumption() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();

        assert_eq!(the_context.solve(&[p, Lit::FALSE]), Ok(false));
        assert_eq!(the_context.failed_assumptions().unwrap(), vec![Lit::FALSE]);
        assert!(!the_context.is_inconsistent());
    }

    #[test]
    fn failed_assumptions_are_a_core() {
        let mut the_context = Context::default();
        let lits = the_context.fresh_literals(6).unwrap();

        // A chain of implications from lits[0] to lits[3].
        assert!(the_context.add_clause(&[-lits[0], lits[1]]).is_ok());
        assert!(the_context.add_clause(&[-lits[1], lits[2]]).is_ok());
        assert!(the_context.add_clause(&[-lits[2], lits[3]]).is_ok());

        let assumptions = [lits[4], lits[0], lits[5], -lits[3]];
        assert_eq!(the_context.solve(&assumptions), Ok(false));

        let failed = the_context.failed_assumptions().unwrap();
        assert!(failed.iter().all(|lit| assumptions.contains(lit)));
        assert!(failed.contains(&lits[0]));
        assert!(failed.contains(&-lits[3]));
        assert!(!failed.contains(&lits[4]));
        assert!(!failed.contains(&lits[5]));

        assert_eq!(the_context.solve(&failed), Ok(false));
        assert_eq!(the_context.solve(&[lits[4], lits[5]]), Ok(true));
    }

    #[test]
    fn failed_assumptions_cleared() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();
        let q = the_context.fresh_literal().unwrap();
        assert!(the_context.add_clause(&[-p, -q]).is_ok());

        assert_eq!(the_context.solve(&[p, q]), Ok(false));
        assert!(!the_context.failed_assumptions().unwrap().is_empty());

        assert_eq!(the_context.solve(&[p]), Ok(true));
        assert!(the_context.failed_assumptions().unwrap().is_empty());
    }

    #[test]
    fn true_assumptions_hold_levels() {
        let mut the_context = Context::default();
        let lits = the_context.fresh_literals(4).unwrap();
        assert!(the_context.add_clause(&[lits[0]]).is_ok());
        assert!(the_context.add_clause(&[-lits[1], lits[2]]).is_ok());
        assert!(the_context.add_clause(&[-lits[2], -lits[3]]).is_ok());

        assert_eq!(
            the_context.solve(&[lits[0], Lit::TRUE, lits[1], lits[0], lits[2]]),
            Ok(true)
        );
        assert_eq!(the_context.value(lits[3]), Ok(false));

        assert_eq!(the_context.solve(&[lits[0], lits[1], lits[3]]), Ok(false));
        let failed = the_context.failed_assumptions().unwrap();
        assert!(failed.contains(&lits[1]));
        assert!(failed.contains(&lits[3]));
        assert!(!failed.contains(&lits[0]));
    }
}

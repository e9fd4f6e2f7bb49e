use burrow_sat::{
    builder::ClauseOk,
    context::{Context, ContextState},
    reports::Report,
    structures::literal::Lit,
    types::err::{ErrorKind, LiteralError, StateError},
};

mod basic {

    use super::*;

    #[test]
    fn one_literal() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();
        assert_eq!(the_context.add_clause(&[p]), Ok(ClauseOk::Unit));
        assert_eq!(the_context.solve(&[]), Ok(true));
        assert_eq!(the_context.report(), Report::Satisfiable);
        assert_eq!(the_context.value(p), Ok(true));
    }

    #[test]
    fn conflict() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();
        let q = the_context.fresh_literal().unwrap();

        assert!(the_context.add_clause(&[p, q]).is_ok());
        assert!(the_context.add_clause(&[-p, -q]).is_ok());
        assert!(the_context.add_clause(&[p, -q]).is_ok());
        assert!(the_context.add_clause(&[-p, q]).is_ok());

        assert_eq!(the_context.solve(&[]), Ok(false));
        assert_eq!(the_context.report(), Report::Unsatisfiable);
        assert!(the_context.is_inconsistent());
        assert_eq!(the_context.value(p), Err(ErrorKind::State(StateError::NoModel)));
    }

    #[test]
    fn duplicates() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();
        let q = the_context.fresh_literal().unwrap();

        assert_eq!(the_context.add_clause(&[p, q, q]), Ok(ClauseOk::Added));
        assert_eq!(the_context.clause_count(), 1);
    }

    #[test]
    fn tautology_skip() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();
        let q = the_context.fresh_literal().unwrap();

        assert_eq!(the_context.add_clause(&[p, q, -p]), Ok(ClauseOk::Tautology));
        assert_eq!(the_context.clause_count(), 0);
    }

    #[test]
    fn empty_clause() {
        let mut the_context = Context::default();
        let _ = the_context.fresh_literal().unwrap();

        assert_eq!(the_context.add_clause(&[]), Ok(ClauseOk::Falsified));
        assert_eq!(the_context.solve(&[]), Ok(false));
        assert_eq!(the_context.solve(&[Lit::TRUE]), Ok(false));
    }

    #[test]
    fn constants() {
        let mut the_context = Context::default();

        assert_eq!(the_context.solve(&[]), Ok(true));
        assert_eq!(the_context.solve(&[Lit::TRUE]), Ok(true));
        assert_eq!(the_context.solve(&[Lit::FALSE]), Ok(false));
        assert_eq!(the_context.solve(&[Lit::TRUE, Lit::FALSE]), Ok(false));
        assert_eq!(the_context.solve(&[]), Ok(true));

        assert_eq!(the_context.value(Lit::TRUE), Ok(true));
        assert_eq!(the_context.value(Lit::FALSE), Ok(false));
        assert_eq!(-Lit::TRUE, Lit::FALSE);
    }

    #[test]
    fn constant_clauses() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();

        assert_eq!(the_context.add_clause(&[Lit::TRUE, p]), Ok(ClauseOk::Satisfied));
        assert_eq!(the_context.add_clause(&[Lit::FALSE, p]), Ok(ClauseOk::Unit));
        assert_eq!(the_context.solve(&[-p]), Ok(false));
    }

    #[test]
    fn no_model_before_solve() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();

        assert_eq!(the_context.value(p), Err(ErrorKind::State(StateError::NoModel)));
        assert_eq!(the_context.state(), ContextState::Input);
    }

    #[test]
    fn mutation_invalidates_model() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();

        assert_eq!(the_context.solve(&[]), Ok(true));
        assert!(the_context.value(p).is_ok());

        let q = the_context.fresh_literal().unwrap();
        assert_eq!(the_context.value(p), Err(ErrorKind::State(StateError::NoModel)));

        assert_eq!(the_context.solve(&[]), Ok(true));
        assert!(the_context.add_clause(&[p, q]).is_ok());
        assert_eq!(the_context.value(q), Err(ErrorKind::State(StateError::NoModel)));
    }

    #[test]
    fn foreign_literals() {
        let mut the_context = Context::default();
        let mut other_context = Context::default();
        let p = the_context.fresh_literal().unwrap();
        let q = other_context.fresh_literal().unwrap();

        assert_eq!(p.atom(), q.atom());
        assert_ne!(p, q);
        assert_eq!(
            the_context.add_clause(&[p, q]),
            Err(ErrorKind::Literal(LiteralError::Foreign))
        );
        assert_eq!(
            the_context.solve(&[q]),
            Err(ErrorKind::Literal(LiteralError::Foreign))
        );
        assert_eq!(the_context.clause_count(), 0);
    }

    #[test]
    fn negation_is_pure() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();

        assert_eq!(-(-p), p);
        assert_eq!(p.negate(), -p);
        assert_ne!(p, -p);
        assert_eq!(the_context.atom_count(), 2);
    }
}

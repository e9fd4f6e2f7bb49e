use burrow_sat::{
    config::Config,
    context::{Context, ContextState},
    pool::Pool,
    structures::literal::Lit,
    types::err::{ConfigError, ErrorKind, StateError},
};

/// A pigeonhole formula of `holes` + 1 pigeons, optionally with a spare hole, solved with `config`.
fn pigeonhole(config: Config, holes: usize, spare: bool) -> Result<bool, ErrorKind> {
    let mut the_context = Context::from_config(config);
    let available = holes + usize::from(spare);
    let pigeons = (0..holes + 1)
        .map(|_| the_context.fresh_literals(available))
        .collect::<Result<Vec<_>, _>>()?;

    for pigeon in &pigeons {
        the_context.add_clause(pigeon)?;
    }
    for hole in 0..available {
        let column = pigeons.iter().map(|pigeon| pigeon[hole]).collect::<Vec<_>>();
        the_context.add_at_most_one(&column)?;
    }
    the_context.solve(&[])
}

mod dispose {

    use super::*;

    #[test]
    fn dispose_twice() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();
        assert_eq!(the_context.solve(&[p]), Ok(true));

        assert!(the_context.dispose().is_ok());
        assert_eq!(the_context.state(), ContextState::Disposed);

        let disposed = Err(ErrorKind::State(StateError::Disposed));
        assert_eq!(the_context.dispose(), disposed);
        assert_eq!(the_context.solve(&[]), Err(ErrorKind::State(StateError::Disposed)));
        assert_eq!(the_context.value(p), Err(ErrorKind::State(StateError::Disposed)));
        assert!(the_context.fresh_literal().is_err());
        assert!(the_context.add_clause(&[p]).is_err());
        assert!(the_context.add_at_most_one(&[p, Lit::TRUE]).is_err());
        assert!(the_context.xnor(&[p]).is_err());
        assert!(the_context.literals().is_err());
    }

    #[test]
    fn dispose_leaves_others() {
        let mut first = Context::default();
        let mut second = Context::default();
        let p = first.fresh_literal().unwrap();
        let q = second.fresh_literal().unwrap();
        assert!(second.add_clause(&[-q]).is_ok());

        assert!(first.dispose().is_ok());
        assert_eq!(second.solve(&[]), Ok(true));
        assert_eq!(second.value(q), Ok(false));
        assert!(first.value(p).is_err());
    }
}

mod independence {

    use super::*;

    #[test]
    fn interleaved_contexts() {
        let mut contexts = (0..3).map(|_| Context::default()).collect::<Vec<_>>();
        let lits = contexts
            .iter_mut()
            .map(|context| context.fresh_literals(2).unwrap())
            .collect::<Vec<_>>();

        assert!(contexts[0].add_clause(&[lits[0][0]]).is_ok());
        assert!(contexts[1].add_clause(&[-lits[1][0]]).is_ok());
        assert!(contexts[2].add_clause(&[]).is_ok());

        assert_eq!(contexts[0].solve(&[]), Ok(true));
        assert_eq!(contexts[1].solve(&[]), Ok(true));
        assert_eq!(contexts[2].solve(&[]), Ok(false));

        assert_eq!(contexts[0].value(lits[0][0]), Ok(true));
        assert_eq!(contexts[1].value(lits[1][0]), Ok(false));
        assert!(contexts[1].value(lits[0][0]).is_err());
    }

    #[test]
    fn threads_agree_with_sequential() {
        let _ = env_logger::builder().is_test(true).try_init();

        let instances = [(3, false), (3, true), (4, false), (4, true), (5, false)];
        let sequential = instances
            .iter()
            .map(|(holes, spare)| pigeonhole(Config::default(), *holes, *spare))
            .collect::<Vec<_>>();

        let threaded = crossbeam::scope(|scope| {
            let handles = instances
                .iter()
                .map(|(holes, spare)| {
                    scope.spawn(move |_| pigeonhole(Config::default(), *holes, *spare))
                })
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect::<Vec<_>>()
        })
        .unwrap();

        assert_eq!(sequential, threaded);
        assert_eq!(
            sequential,
            vec![Ok(false), Ok(true), Ok(false), Ok(true), Ok(false)]
        );
    }

    #[test]
    fn contexts_move_between_threads() {
        let mut the_context = Context::default();
        let p = the_context.fresh_literal().unwrap();
        assert!(the_context.add_clause(&[p]).is_ok());

        let (tx, rx) = crossbeam::channel::bounded(1);
        crossbeam::scope(|scope| {
            scope.spawn(move |_| {
                let result = the_context.solve(&[]);
                tx.send((result, the_context.value(p))).unwrap();
            });
        })
        .unwrap();

        assert_eq!(rx.recv().unwrap(), (Ok(true), Ok(true)));
    }
}

mod configuration {

    use super::*;

    #[test]
    fn configurations_agree() {
        let configurations = [
            vec!["--restart=false", "--reduction=false"],
            vec!["--vsids=Chaff", "--minimization=None"],
            vec!["--random_decision_bias=0.5 --polarity_lean=0.5 --seed=11"],
            vec!["--phase_saving=false --luby_u=1 --reduction_interval=1"],
            vec!["--amo_encoding=Sequential", "--lbd_bound=0"],
        ];

        for args in configurations {
            let config = Config::from_args(&args).unwrap();
            assert_eq!(pigeonhole(config.clone(), 4, false), Ok(false));
            assert_eq!(pigeonhole(config, 4, true), Ok(true));
        }
    }

    #[test]
    fn unknown_options() {
        assert_eq!(
            Context::from_args(&["--no-reach-underapprox-cnf"]).err(),
            Some(ErrorKind::Config(ConfigError::UnknownOption(
                "reach-underapprox-cnf".to_string()
            )))
        );
        assert!(Context::from_args(&["--seed=1", "--seed=2"]).is_err());
        assert!(Context::from_args(&["--polarity_lean=2"]).is_err());
    }
}

mod pool {

    use super::*;

    #[test]
    fn keys_after_disposal() {
        let mut pool = Pool::default();
        let first = pool.create(Config::default());
        let second = pool.create_from_args(&["--restart=false"]).unwrap();
        assert_eq!(pool.len(), 2);

        let p = pool.get_mut(first).unwrap().fresh_literal().unwrap();
        assert!(pool.get_mut(first).unwrap().add_clause(&[-p]).is_ok());

        assert!(pool.dispose(first).is_ok());
        assert_eq!(pool.get(first).err(), Some(ErrorKind::State(StateError::Disposed)));
        assert!(pool.dispose(first).is_err());

        let third = pool.create(Config::default());
        assert_ne!(first, third);
        assert!(pool.get(first).is_err());
        assert_eq!(pool.get_mut(second).unwrap().solve(&[]), Ok(true));
        assert_eq!(pool.len(), 2);
        assert!(!pool.is_empty());

        assert!(pool.create_from_args(&["--unknown"]).is_err());
    }
}

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::{CatalogConfig, SolutionCatalog};
use crate::service::{ProblemService, ServiceError};
use crate::utils::Multiset;

fn service_for(config: &CatalogConfig) -> ProblemService {
    ProblemService::new(Arc::new(SolutionCatalog::build(config)))
}

fn small_service() -> ProblemService {
    service_for(&CatalogConfig {
        max_value: 6,
        size: 3,
        ..CatalogConfig::default()
    })
}

fn sparse_service() -> ProblemService {
    let mut entries = BTreeMap::new();
    entries.insert(
        24,
        vec![
            "4 * (5 + 3 - 2)".to_string(),
            "(1 + 3) * (2 + 4)".to_string(),
        ],
    );
    entries.insert(97, vec!["10 * 10 - 3".to_string()]);
    ProblemService::new(Arc::new(SolutionCatalog::from_entries(entries)))
}

#[test]
fn test_get_problem_missing_target() {
    let service = sparse_service();
    let result = service.get_problem(23);
    assert_eq!(result, Err(ServiceError::NoConfiguration { target: 23 }));
    if let Err(err) = result {
        assert_eq!(err.to_string(), "No configuration exists to yield target 23");
    }
}

#[test]
fn test_get_problem_numbers_match_a_stored_solution() {
    let service = sparse_service();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let problem = service.get_problem_with_rng(24, &mut rng);
        assert!(problem.is_ok());
        if let Ok(problem) = problem {
            assert_eq!(problem.target, 24);
            assert_eq!(
                Multiset::new(problem.numbers.clone()),
                Multiset::from_text(&problem.solution)
            );
            assert!(service.catalog().expressions(24).contains(&problem.solution));
        }
    }
}

#[test]
fn test_get_problem_shuffles_display_order() {
    let service = sparse_service();
    let mut rng = StdRng::seed_from_u64(42);
    let mut orders = Vec::new();
    for _ in 0..50 {
        if let Ok(problem) = service.get_problem_with_rng(97, &mut rng) {
            orders.push(problem.numbers);
        }
    }
    assert_eq!(orders.len(), 50);
    orders.sort();
    orders.dedup();
    // 10 10 3 has three distinct orderings
    assert_eq!(orders.len(), 3);
}

#[test]
fn test_problem_string_lists_numbers() {
    let service = sparse_service();
    let problem = service.get_problem(97);
    assert!(problem.is_ok());
    if let Ok(problem) = problem {
        let text = problem.to_string();
        assert_eq!(Multiset::from_text(&text), Multiset::new(vec![3, 10, 10]));
        assert_eq!(text.split(' ').count(), 3);
    }
}

#[test]
fn test_random_target_comes_from_catalog() {
    let service = small_service();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        let problem = service.get_problem_with_random_target_rng(0, 100, &mut rng);
        assert!(problem.is_ok());
        if let Ok(problem) = problem {
            assert!((0..100).contains(&problem.target));
            assert!(service.catalog().contains(problem.target));
        }
    }
}

#[test]
fn test_random_target_terminates_on_sparse_range() {
    let service = sparse_service();
    let mut rng = StdRng::seed_from_u64(3);

    let problem = service.get_problem_with_random_target_rng(25, 100, &mut rng);
    assert!(matches!(problem, Ok(ref p) if p.target == 97));

    // Upper bound is exclusive
    assert_eq!(
        service.get_problem_with_random_target_rng(25, 97, &mut rng),
        Err(ServiceError::NoReachableTarget { min: 25, max: 97 })
    );
    assert!(service.get_problem_with_random_target(98, 1000).is_err());
}

#[test]
fn test_solve_precomputed_matches_multiset_exactly() {
    let service = sparse_service();
    assert_eq!(
        service.solve_precomputed(&Multiset::from_text("4 3 2 1"), 24),
        Some("(1 + 3) * (2 + 4)".to_string())
    );
    assert_eq!(
        service.solve_precomputed(&Multiset::new(vec![5, 4, 3, 2]), 24),
        Some("4 * (5 + 3 - 2)".to_string())
    );
    // Same length and sum as 2 3 4 5 but a different multiset
    assert_eq!(service.solve_precomputed(&Multiset::new(vec![1, 4, 4, 5]), 24), None);
    assert_eq!(service.solve_precomputed(&Multiset::new(vec![1, 2, 3, 4]), 25), None);
}

#[test]
fn test_solve_precomputed_succeeds_for_every_problem() {
    let service = small_service();
    let mut rng = StdRng::seed_from_u64(11);
    for &target in service.catalog().reachable_targets() {
        for _ in 0..5 {
            let problem = service.get_problem_with_rng(target, &mut rng);
            assert!(problem.is_ok());
            if let Ok(problem) = problem {
                let numbers = Multiset::from_text(&problem.to_string());
                let solution = service.solve_precomputed(&numbers, target);
                assert!(solution.is_some(), "no solution for {} -> {}", problem, target);
                if let Some(solution) = solution {
                    assert!(service.check(&solution, &numbers, target).valid);
                }
            }
        }
    }
}

#[test]
fn test_solve_falls_back_to_enumeration() {
    let service = small_service();
    // 10 is outside the precomputed value range and 200 outside the target range
    let numbers = Multiset::new(vec![10, 10, 2]);
    let solution = service.solve(&numbers, 200);
    assert!(solution.is_some());
    if let Some(solution) = solution {
        assert!(service.check(&solution, &numbers, 200).valid);
    }

    let four = Multiset::new(vec![1, 2, 3, 4]);
    let solution = service.solve(&four, 24);
    assert!(solution.is_some());
    if let Some(solution) = solution {
        assert!(service.check(&solution, &four, 24).valid);
    }
}

#[test]
fn test_solve_unsolvable() {
    let service = small_service();
    assert_eq!(service.solve(&Multiset::new(vec![1, 1, 1, 1]), 24), None);
    assert_eq!(service.solve(&Multiset::new(vec![]), 24), None);
}

#[test]
fn test_check_delegates_to_validator() {
    let service = sparse_service();
    let required = Multiset::from_text("5 4 3 2");
    assert!(service.check("4*(5+3-2)", &required, 24).valid);
    assert!(!service.check("4*(5+3-2)", &required, 25).valid);
}

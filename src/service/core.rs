use std::sync::Arc;

use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::SolutionCatalog;
use crate::service::errors::ServiceError;
use crate::service::problem::Problem;
use crate::solver::ExpressionEnumerator;
use crate::utils::{Multiset, literal_numbers};
use crate::validator::{AnswerValidator, CheckResult};

/// Problem generation, solution lookup and answer checking for one catalog
#[derive(Debug, Clone)]
pub struct ProblemService {
    catalog: Arc<SolutionCatalog>,
    validator: AnswerValidator,
}

impl ProblemService {
    pub fn new(catalog: Arc<SolutionCatalog>) -> Self {
        Self {
            catalog,
            validator: AnswerValidator::new(),
        }
    }

    pub fn catalog(&self) -> &SolutionCatalog {
        &self.catalog
    }

    /// Random problem whose answer is `target`
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NoConfiguration` if the catalog cannot reach `target`.
    pub fn get_problem(&self, target: i64) -> Result<Problem, ServiceError> {
        self.get_problem_with_rng(target, &mut rand::thread_rng())
    }

    /// # Errors
    ///
    /// Returns `ServiceError::NoConfiguration` if the catalog cannot reach `target`.
    pub fn get_problem_with_rng<R: Rng + ?Sized>(
        &self,
        target: i64,
        rng: &mut R,
    ) -> Result<Problem, ServiceError> {
        let solution = self
            .catalog
            .expressions(target)
            .choose(rng)
            .ok_or(ServiceError::NoConfiguration { target })?;

        let mut numbers = literal_numbers(solution);
        numbers.shuffle(rng);

        debug!("Problem for {}: {:?} (solution {})", target, numbers, solution);
        Ok(Problem {
            target,
            numbers,
            solution: solution.clone(),
        })
    }

    /// Random problem for a random reachable target in `[min, max)`
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NoReachableTarget` if no catalog target lies in the range.
    pub fn get_problem_with_random_target(
        &self,
        min: i64,
        max: i64,
    ) -> Result<Problem, ServiceError> {
        self.get_problem_with_random_target_rng(min, max, &mut rand::thread_rng())
    }

    /// # Errors
    ///
    /// Returns `ServiceError::NoReachableTarget` if no catalog target lies in the range.
    pub fn get_problem_with_random_target_rng<R: Rng + ?Sized>(
        &self,
        min: i64,
        max: i64,
        rng: &mut R,
    ) -> Result<Problem, ServiceError> {
        let target = *self
            .catalog
            .reachable_in(min, max)
            .choose(rng)
            .ok_or(ServiceError::NoReachableTarget { min, max })?;
        self.get_problem_with_rng(target, rng)
    }

    /// First stored expression for `target` that uses exactly `numbers`
    pub fn solve_precomputed(&self, numbers: &Multiset, target: i64) -> Option<String> {
        self.catalog
            .expressions(target)
            .iter()
            .find(|expr| Multiset::from_text(expr) == *numbers)
            .cloned()
    }

    /// Catalog lookup, falling back to enumerating `numbers` directly
    pub fn solve(&self, numbers: &Multiset, target: i64) -> Option<String> {
        if let Some(found) = self.solve_precomputed(numbers, target) {
            return Some(found);
        }

        info!(
            "No precomputed solution for {} -> {}, enumerating",
            numbers, target
        );
        ExpressionEnumerator::new().find_expression(numbers.as_slice(), target)
    }

    /// Validate a player's answer against a problem
    pub fn check(&self, answer: &str, required: &Multiset, target: i64) -> CheckResult {
        self.validator.check(answer, required, target)
    }
}

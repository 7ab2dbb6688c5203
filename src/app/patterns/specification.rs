use crate::core::{Demo, PatternKind, Result, Transcript};

pub trait Specification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool;
}

impl<T, F> Specification<T> for F
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self(candidate)
    }
}

pub struct And<A, B>(A, B);
pub struct Or<A, B>(A, B);
pub struct Not<A>(A);

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for And<A, B> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate) && self.1.is_satisfied_by(candidate)
    }
}

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for Or<A, B> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate) || self.1.is_satisfied_by(candidate)
    }
}

impl<T, A: Specification<T>> Specification<T> for Not<A> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.0.is_satisfied_by(candidate)
    }
}

/// Combinators available on every specification.
pub trait SpecificationExt<T>: Specification<T> + Sized {
    fn and<B: Specification<T>>(self, other: B) -> And<Self, B> {
        And(self, other)
    }

    fn or<B: Specification<T>>(self, other: B) -> Or<Self, B> {
        Or(self, other)
    }

    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T, S: Specification<T>> SpecificationExt<T> for S {}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: &'static str,
    pub years_experience: u32,
    pub knows_rust: bool,
    pub on_probation: bool,
}

pub fn experienced(candidate: &Candidate) -> bool {
    candidate.years_experience >= 5
}

pub fn knows_rust(candidate: &Candidate) -> bool {
    candidate.knows_rust
}

pub fn on_probation(candidate: &Candidate) -> bool {
    candidate.on_probation
}

pub fn select<'a, T, S: Specification<T>>(items: &'a [T], spec: &S) -> Vec<&'a T> {
    items.iter().filter(|item| spec.is_satisfied_by(item)).collect()
}

fn candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            name: "ada",
            years_experience: 8,
            knows_rust: true,
            on_probation: false,
        },
        Candidate {
            name: "bo",
            years_experience: 2,
            knows_rust: true,
            on_probation: false,
        },
        Candidate {
            name: "cy",
            years_experience: 10,
            knows_rust: false,
            on_probation: true,
        },
        Candidate {
            name: "di",
            years_experience: 6,
            knows_rust: false,
            on_probation: false,
        },
    ]
}

fn names(selected: &[&Candidate]) -> String {
    selected
        .iter()
        .map(|candidate| candidate.name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct SpecificationDemo;

#[async_trait::async_trait]
impl Demo for SpecificationDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Specification
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());
        let pool = candidates();

        let senior_rustacean = experienced.and(knows_rust);
        transcript.line(format!(
            "experienced and knows rust: {}",
            names(&select(&pool, &senior_rustacean))
        ));

        let either = experienced.or(knows_rust);
        transcript.line(format!(
            "experienced or knows rust: {}",
            names(&select(&pool, &either))
        ));

        let eligible = experienced.and(on_probation.not());
        transcript.line(format!(
            "experienced and not on probation: {}",
            names(&select(&pool, &eligible))
        ));

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_are_specifications() {
        let even = |n: &u32| n % 2 == 0;
        let big = |n: &u32| *n > 10;
        let spec = even.and(big.not());
        assert!(spec.is_satisfied_by(&4));
        assert!(!spec.is_satisfied_by(&12));
        assert!(!spec.is_satisfied_by(&3));
    }

    #[test]
    fn test_or_accepts_either_side() {
        let pool = candidates();
        let spec = knows_rust.or(on_probation);
        assert_eq!(names(&select(&pool, &spec)), "ada, bo, cy");
    }

    #[tokio::test]
    async fn test_demo_transcript() {
        let transcript = SpecificationDemo.run().await.unwrap();
        assert_eq!(
            transcript.lines,
            vec![
                "experienced and knows rust: ada",
                "experienced or knows rust: ada, bo, cy, di",
                "experienced and not on probation: ada, di",
            ]
        );
    }
}

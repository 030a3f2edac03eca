use crate::core::{AgeHolder, Greeter, Persona};
use crate::utils::error::Result;

/// Owns one greeter and one age holder and forwards to them in a fixed order.
#[derive(Debug)]
pub struct Composite<G: Greeter, A: AgeHolder> {
    greeter: G,
    age_holder: A,
}

impl<G: Greeter, A: AgeHolder> Composite<G, A> {
    /// Builds both collaborators. The greeter is built first; a failure from
    /// either constructor is returned as-is and no composite exists.
    pub fn new(name: &str, age: f64) -> Result<Self> {
        let greeter = G::from_name(name)?;
        let age_holder = A::from_age(age)?;
        Ok(Self::from_parts(greeter, age_holder))
    }

    pub fn from_persona(persona: &Persona) -> Result<Self> {
        Self::new(&persona.name, persona.age)
    }

    pub fn from_parts(greeter: G, age_holder: A) -> Self {
        Self {
            greeter,
            age_holder,
        }
    }

    pub fn greeter(&self) -> &G {
        &self.greeter
    }

    pub fn age_holder(&self) -> &A {
        &self.age_holder
    }

    /// Calls `say_hello` and then `get_age`. Results are discarded; an error
    /// from the greeter stops the call before the age holder is reached.
    pub fn introduce_yourself(&self) -> Result<()> {
        let greeting = self.greeter.say_hello()?;
        tracing::debug!("greeter answered: {}", greeting);

        let age = self.age_holder.get_age()?;
        tracing::debug!("age holder answered: {}", age);

        Ok(())
    }

    /// Runs `introduce_yourself` `times` times, stopping at the first error.
    pub fn introduce_times(&self, times: usize) -> Result<()> {
        for round in 1..=times {
            tracing::debug!("Introduction {}/{}", round, times);
            self.introduce_yourself()?;
        }
        Ok(())
    }
}

use crate::domain::ports::{AgeHolder, Greeter};
use crate::utils::error::Result;

/// Greets on stdout.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleGreeter {
    name: String,
}

impl ConsoleGreeter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn greeting(&self) -> String {
        format!("Hello, my name is {}", self.name)
    }
}

impl Greeter for ConsoleGreeter {
    fn from_name(name: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
        })
    }

    fn say_hello(&self) -> Result<String> {
        let line = self.greeting();
        println!("{}", line);
        Ok(line)
    }
}

/// Reports its age on stdout.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleAgeHolder {
    age: f64,
}

impl ConsoleAgeHolder {
    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn statement(&self) -> String {
        // f64's Display drops the fraction for integral values ("30", not "30.0")
        format!("I am {} years old", self.age)
    }
}

impl AgeHolder for ConsoleAgeHolder {
    fn from_age(age: f64) -> Result<Self> {
        Ok(Self { age })
    }

    fn get_age(&self) -> Result<f64> {
        println!("{}", self.statement());
        Ok(self.age)
    }
}

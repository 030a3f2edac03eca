use crate::utils::error::Result;

/// Collaborator built from an identifier.
pub trait Greeter {
    fn from_name(name: &str) -> Result<Self>
    where
        Self: Sized;

    fn say_hello(&self) -> Result<String>;
}

/// Collaborator built from a numeric value.
pub trait AgeHolder {
    fn from_age(age: f64) -> Result<Self>
    where
        Self: Sized;

    fn get_age(&self) -> Result<f64>;
}

impl<T: Greeter> Greeter for Box<T> {
    fn from_name(name: &str) -> Result<Self> {
        T::from_name(name).map(Box::new)
    }

    fn say_hello(&self) -> Result<String> {
        (**self).say_hello()
    }
}

impl<T: AgeHolder> AgeHolder for Box<T> {
    fn from_age(age: f64) -> Result<Self> {
        T::from_age(age).map(Box::new)
    }

    fn get_age(&self) -> Result<f64> {
        (**self).get_age()
    }
}

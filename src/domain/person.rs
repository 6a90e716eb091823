use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A person with two exported name fields and one restricted field.
///
/// `first_name` and `last_name` are `pub` and can be read or reassigned from
/// anywhere. `secret` is private to this module: it is set by the constructor
/// and nothing outside `domain::person` can name it.
///
/// Reading the secret from another module is rejected by the compiler:
///
/// ```compile_fail,E0616
/// use person_record::domain::new_person;
///
/// let person = new_person("Homer", "Simpson", "s3cr37");
/// println!("{}", person.secret);
/// ```
///
/// So is writing it:
///
/// ```compile_fail,E0616
/// use person_record::domain::new_person;
///
/// let mut person = new_person("Homer", "Simpson", "s3cr37");
/// person.secret = String::from("new");
/// ```
///
/// And a struct literal cannot sidestep the constructor:
///
/// ```compile_fail,E0451
/// use person_record::domain::Person;
///
/// let person = Person {
///     first_name: String::from("Homer"),
///     last_name: String::from("Simpson"),
///     secret: String::from("s3cr37"),
/// };
/// ```
///
/// The exported fields stay open:
///
/// ```
/// use person_record::domain::new_person;
///
/// let mut person = new_person("Homer", "Simpson", "s3cr37");
/// person.first_name = String::from("Bart");
/// assert_eq!(person.first_name, "Bart");
/// assert_eq!(person.last_name, "Simpson");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    secret: String,
}

/// Payload for updating the exported fields of a [`Person`].
///
/// There is no slot for the secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Person {
    /// Creates a new Person with every field set.
    ///
    /// # Arguments
    /// * `first_name` - exported given name
    /// * `last_name` - exported family name
    /// * `secret` - restricted value, only reachable from this module
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            secret: secret.into(),
        }
    }

    /// Overwrites the exported fields present in `update`.
    pub fn apply_update(&mut self, update: PersonUpdate) {
        let first_changed = update.first_name.is_some();
        let last_changed = update.last_name.is_some();

        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }

        debug!(first_changed, last_changed, "Person updated");
    }
}

/// Constructs a [`Person`]. Never fails.
pub fn new_person(
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    secret: impl Into<String>,
) -> Person {
    Person::new(first_name, last_name, secret)
}

/// Renders every field, the restricted one included, as
/// `{first_name:<v> last_name:<v> secret:<v>}`.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{first_name:{} last_name:{} secret:{}}}",
            self.first_name, self.last_name, self.secret
        )
    }
}

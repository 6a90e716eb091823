//! Demonstration entry point.
//!
//! Builds a [`Person`](person_record::domain::Person) and prints it. The secret shows up in the
//! formatted output even though this file cannot name the field.

use person_record::domain::new_person;
use person_record::telemetry::{setup_tracing, TelemetryError};
use tracing::info;

fn main() -> Result<(), TelemetryError> {
    setup_tracing()?;

    let person = new_person("Homer", "Simpson", "s3cr37");
    info!(first_name = %person.first_name, last_name = %person.last_name, "Person created");

    // output: {first_name:Homer last_name:Simpson secret:s3cr37}
    println!("{person}");

    // Neither line compiles here:
    //
    //     println!("{}", person.secret);
    //     person.secret = "new".to_string();
    //
    // error[E0616]: field `secret` of struct `Person` is private

    Ok(())
}

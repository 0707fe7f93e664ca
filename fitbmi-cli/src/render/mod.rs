pub mod chart;
pub mod json;
pub mod text;

use fitbmi_model::Gender;

fn group_name(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "male",
        Gender::Female => "female",
    }
}

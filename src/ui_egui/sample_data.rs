//! Payloads the job screen is served with: contacts available for assignment
//! and the client → job → task option maps.

use crate::models::contact::Contact;
use crate::models::select_option::OptionMap;

const CONTACTS_JSON: &str = r#"[
    {"id": 1, "first_name": "Ada", "last_name": "Lovelace",
     "company_name": "Analytical Engines", "position": "Programmer"},
    {"id": 2, "first_name": "Charles", "last_name": "Babbage",
     "company_name": "Analytical Engines", "position": "Director"},
    {"id": 3, "first_name": "Grace", "last_name": "Hopper",
     "company_name": "Navy Computing", "position": "Rear Admiral"},
    {"id": 4, "first_name": "Alan", "last_name": "Turing",
     "company_name": "Bletchley Park", "position": "Cryptanalyst"},
    {"id": 5, "first_name": "Joan", "last_name": "Clarke",
     "company_name": "Bletchley Park", "position": "Cryptanalyst"},
    {"id": 6, "first_name": "Tommy", "last_name": "Flowers",
     "company_name": "Post Office Research", "position": "Engineer"},
    {"id": 7, "first_name": "", "last_name": "Ferranti",
     "company_name": "Ferranti Ltd", "position": ""}
]"#;

const CLIENT_JOBS_JSON: &str = r#"{
    "1": [
        {"text": "00012 - Difference Engine", "value": "12"},
        {"text": "00013 - Analytical Engine", "value": "13"}
    ],
    "2": [{"text": "00020 - Bombe", "value": "20"}, {"text": "00021 - Colossus", "value": "21"}]
}"#;

const JOB_TASKS_JSON: &str = r#"{
    "12": [{"text": "Design", "value": "120"}, {"text": "Fabrication", "value": "121"}],
    "13": [{"text": "Programming", "value": "130"}],
    "20": [{"text": "Wiring", "value": "200"}, {"text": "Testing", "value": "201"}],
    "21": [{"text": "Valve procurement", "value": "210"}]
}"#;

pub fn clients() -> Vec<(&'static str, &'static str)> {
    vec![("Analytical Engines", "1"), ("Bletchley Park", "2"), ("Ferranti Ltd", "3")]
}

pub fn contacts() -> Vec<Contact> {
    Contact::list_from_json(CONTACTS_JSON).unwrap_or_else(|e| {
        log::error!("Failed to load contacts: {:#}", e);
        Vec::new()
    })
}

pub fn client_jobs() -> OptionMap {
    load_option_map(CLIENT_JOBS_JSON)
}

pub fn job_tasks() -> OptionMap {
    load_option_map(JOB_TASKS_JSON)
}

fn load_option_map(json: &str) -> OptionMap {
    OptionMap::from_json(json).unwrap_or_else(|e| {
        log::error!("Failed to load option map: {:#}", e);
        OptionMap::new()
    })
}

use schemars::schema_for;
use tagsmith_core::TypeDescriptor;

fn main() {
    let schema = schema_for!(TypeDescriptor);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}

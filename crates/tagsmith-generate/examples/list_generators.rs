use tagsmith_generate::GeneratorRegistry;

fn main() {
    let registry = GeneratorRegistry::new();
    for name in registry.names() {
        println!("{name}");
    }
}

//! `pommel scopes`

use pommel_core::{PommelConfig, ScopeMapper};

pub fn run(config: &PommelConfig) {
    let mapper = ScopeMapper::new(config.generator.application_component.clone());
    for (scope, target) in mapper.table() {
        println!("@{scope} -> {target}");
    }
    println!("(no scope) -> {}", mapper.application_component());
}

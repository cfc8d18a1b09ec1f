use source_retrieve_core::SfdxCommand;

pub fn print_command_breakdown(command: &SfdxCommand) {
    println!("   🔧 Command breakdown:");
    println!("      • command: {}", command.program);

    if let Some(subcommand) = command.subcommand() {
        println!("      • subcommand: {}", subcommand);
    }

    let extra_args = &command.args[command.args.len().min(1)..];
    if !extra_args.is_empty() {
        println!("      • extraArgs: {:?}", extra_args);
    }

    for (flag, value) in &command.flags {
        match value {
            Some(value) => println!("      • {}: {}", flag, value),
            None => println!("      • {}", flag),
        }
    }

    if let Some(ref description) = command.description {
        println!("      • description: {}", description);
    }

    if let Some(ref log_name) = command.log_name {
        println!("      • logName: {}", log_name);
    }
}

mod alias_command;
mod settings_lifecycle;

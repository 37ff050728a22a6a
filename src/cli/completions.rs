use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bash:\n    mcwarm completions bash > ~/.local/share/bash-completion/completions/mcwarm\n\n\
                  Zsh:\n    mcwarm completions zsh > ~/.zfunc/_mcwarm\n\n\
                  Fish:\n    mcwarm completions fish > ~/.config/fish/completions/mcwarm.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

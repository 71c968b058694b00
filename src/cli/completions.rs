use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    create-moltbot-env completions bash > ~/.bash_completion.d/create-moltbot-env\n\n\
                  Generate zsh completions:\n    create-moltbot-env completions zsh > ~/.zfunc/_create-moltbot-env\n\n\
                  Generate fish completions:\n    create-moltbot-env completions fish > ~/.config/fish/completions/create-moltbot-env.fish\n\n\
                  Generate PowerShell completions:\n    create-moltbot-env completions powershell")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}

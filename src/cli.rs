//! Interface de linha de comando do stumble baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (discover, interactive)
//! e a flag global `--verbose`. Sem subcomando, a sessão interativa é usada.

use clap::{Parser, Subcommand};

/// stumble — Descoberta interativa de raças de gatos no terminal.
#[derive(Debug, Parser)]
#[command(name = "stumble", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Habilita saída detalhada (mostra a causa de falhas de transporte).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Executa uma única descoberta e imprime o resultado.
    Discover {
        /// Valor a excluir nesta execução (repetível).
        #[arg(long = "ban", value_name = "VALUE")]
        bans: Vec<String>,
    },

    /// Inicia a sessão interativa (padrão quando nenhum subcomando é dado).
    Interactive,
}

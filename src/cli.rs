//! Interface de linha de comando do simmer baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (sync, recipes,
//! pantry, week) e a flag global --verbose.

use clap::{Parser, Subcommand};

/// simmer — planejador de refeições doméstico com sincronização de receitas.
#[derive(Debug, Parser)]
#[command(name = "simmer", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inicia uma sincronização de metadados de receitas e acompanha o job
    /// até um status terminal.
    Sync,

    /// Lista as receitas do caderno.
    Recipes {
        /// Página a exibir (a partir de 1).
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Número de receitas por página.
        #[arg(long, default_value_t = 10)]
        page_size: usize,

        /// Termo de busca aplicado ao título.
        #[arg(long)]
        search: Option<String>,
    },

    /// Lista os ingredientes da despensa.
    Pantry,

    /// Mostra a semana de planejamento.
    Week {
        /// Mostra a próxima semana em vez da atual.
        #[arg(long)]
        next: bool,
    },
}

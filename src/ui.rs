//! Interface de terminal do simmer — spinners e saída colorida.
//!
//! Usa as crates `indicatif` para spinners de progresso e `console` para
//! estilização com cores. O [`SyncProgress`] acompanha visualmente um job de
//! sincronização no terminal enquanto seu status é consultado.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::sync::{JobStatus, SyncJob};

/// Indicador visual de progresso para um job de sincronização.
///
/// Exibe um spinner animado enquanto o job está pendente ou em andamento e
/// mensagens coloridas para conclusão (verde) e falha (vermelho).
pub struct SyncProgress {
    // Barra de progresso/spinner do indicatif.
    pb: ProgressBar,
    // Estilo verde para mensagens de sucesso.
    green: Style,
    // Estilo vermelho para mensagens de falha.
    red: Style,
    // Estilo amarelo para estados intermediários.
    yellow: Style,
}

impl SyncProgress {
    /// Inicia o spinner para o job recém-criado.
    pub fn start(job: &SyncJob) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(format!("sync job {} — {}", job.id, job.status));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }

    /// Atualiza a mensagem do spinner para refletir o status atual.
    pub fn update(&self, job: &SyncJob) {
        self.pb
            .set_message(format!("sync job {} — {}", job.id, job.status));
    }

    /// Finaliza o spinner e exibe o resultado terminal do job.
    pub fn complete(&self, job: &SyncJob) {
        self.pb.finish_and_clear();
        match job.status {
            JobStatus::Completed => {
                println!("  {} Sync completed", self.green.apply_to("✓"));
            }
            JobStatus::Failed => {
                println!("  {} Sync failed", self.red.apply_to("✗"));
            }
            status => {
                println!("  {} Sync ended in {status}", self.yellow.apply_to("•"));
            }
        }
    }

    /// Imprime o registro do job formatado em JSON.
    pub fn print_job(&self, job: &SyncJob) {
        let status_style = match job.status {
            JobStatus::Completed => &self.green,
            JobStatus::Failed => &self.red,
            _ => &self.yellow,
        };
        println!();
        println!("{}", status_style.apply_to("─── Sync Job ───"));
        println!("{}", serde_json::to_string_pretty(job).unwrap_or_default());
    }
}

//! Tipos de erro para o cliente do serviço de extração.
//!
//! Define [`ExtractionError`] com variantes para falhas de transporte,
//! códigos de status inesperados e respostas indecodificáveis. Usa `thiserror`
//! para derivar `Display` e `Error` a partir dos atributos `#[error(...)]`.

use thiserror::Error;

/// Erros que podem ocorrer ao enviar um documento ao serviço de extração.
///
/// As variantes cobrem os três cenários de falha por item:
/// - [`Transport`](ExtractionError::Transport) — falha na camada de rede
/// - [`UnexpectedStatus`](ExtractionError::UnexpectedStatus) — qualquer resposta não-200
/// - [`InvalidResponse`](ExtractionError::InvalidResponse) — corpo não decodificável
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Falha de rede subjacente (DNS, conexão recusada).
    /// Encapsula o erro original do `reqwest` via `#[from]`.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// O serviço respondeu com um código de status diferente de 200.
    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16 },

    /// O corpo da resposta não pôde ser decodificado na estrutura esperada.
    #[error("failed to decode extraction response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

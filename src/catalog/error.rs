//! Tipos de erro para o cliente do catálogo (The Cat API).
//!
//! Define [`CatalogError`] com variantes para erros da API, resposta vazia
//! e falhas de rede. Usa `thiserror` para derivar `Display` e `Error`
//! automaticamente a partir dos atributos `#[error(...)]`.
//!
//! Qualquer variante é terminal para a chamada de descoberta em andamento:
//! o laço de retentativa nunca mascara uma falha de transporte.

use thiserror::Error;

/// Erros que podem ocorrer ao buscar um item do catálogo.
///
/// As variantes cobrem os três cenários de falha de transporte:
/// - [`ApiError`](CatalogError::ApiError) — o servidor retornou um status não-OK
/// - [`EmptyResponse`](CatalogError::EmptyResponse) — corpo válido mas sem itens
/// - [`NetworkError`](CatalogError::NetworkError) — falha na camada de rede ou parse
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Erro retornado pela API (ex.: 401 chave inválida, 500 erro interno).
    /// Contém o código de status HTTP e a mensagem de erro do corpo da resposta.
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// O corpo da resposta não era um array JSON não-vazio.
    #[error("empty response")]
    EmptyResponse,

    /// Falha de rede ou de decodificação subjacente (DNS, conexão recusada,
    /// timeout, JSON malformado). Encapsula o erro original do `reqwest` via `#[from]`.
    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

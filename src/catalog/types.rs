//! Tipos de dados para a resposta do endpoint de busca da The Cat API.
//!
//! As structs de fio ([`CatalogItem`], [`BreedInfo`]) derivam `Deserialize`
//! conforme o formato retornado por `v1/images/search`. O tipo de domínio
//! [`Candidate`] carrega apenas os atributos que a interface exibe e o
//! filtro de exclusão avalia.

use serde::Deserialize;

/// Um item do array retornado pelo endpoint de busca.
///
/// O campo `breeds` pode estar ausente ou vazio quando a imagem não tem
/// metadados de raça associados.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    /// Identificador opaco da imagem (gerado pela API).
    pub id: String,
    /// URL da imagem.
    pub url: String,
    /// Raças associadas à imagem. Normalmente zero ou uma entrada.
    #[serde(default)]
    pub breeds: Vec<BreedInfo>,
}

/// Metadados de uma raça dentro de um [`CatalogItem`].
///
/// Todos os campos são opcionais no fio: a API não garante que cada raça
/// tenha nome, origem e expectativa de vida preenchidos.
#[derive(Debug, Clone, Deserialize)]
pub struct BreedInfo {
    /// Nome da raça (ex.: "Siamese").
    pub name: Option<String>,
    /// País de origem da raça (ex.: "Thailand").
    pub origin: Option<String>,
    /// Faixa de expectativa de vida como rótulo textual (ex.: "12 - 15").
    pub life_span: Option<String>,
}

/// Um item buscado do catálogo com seus atributos derivados.
///
/// Construído fresco a cada tentativa a partir da resposta; imutável;
/// descartado se rejeitado pelo filtro, exibido se aceito. Nunca persistido.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Identificador opaco, usado apenas para exibição.
    pub id: String,
    /// URL da imagem, tratada como opaca.
    pub image_url: String,
    /// Nome da raça.
    pub name: String,
    /// País de origem.
    pub origin: String,
    /// Rótulo de expectativa de vida (renomeado de `life_span`).
    pub life_span_label: String,
}

impl Candidate {
    /// Extrai um candidato da primeira raça de um item do catálogo.
    ///
    /// Retorna `None` se o item não tem raça associada ou se qualquer um dos
    /// três atributos está ausente. Nesse caso o item é válido porém
    /// inutilizável, e o chamador deve tratá-lo como pulado, não como erro.
    pub fn from_item(item: &CatalogItem) -> Option<Self> {
        let breed = item.breeds.first()?;
        Some(Self {
            id: item.id.clone(),
            image_url: item.url.clone(),
            name: breed.name.clone()?,
            origin: breed.origin.clone()?,
            life_span_label: breed.life_span.clone()?,
        })
    }
}

/// Resultado de uma única busca bem-sucedida no transporte.
///
/// Distingue em tempo de compilação "item utilizável" de "item sem raça":
/// o segundo é uma resposta válida que o laço de descoberta pula sem
/// contabilizar como problema de rede.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// O item tinha metadados de raça completos.
    Candidate(Candidate),
    /// O item não tinha raça (ou raça incompleta); deve ser pulado.
    SkippedNoBreed,
}

//! Tipos de dados para a resposta do serviço externo de extração de receitas.
//!
//! Todas as structs derivam `Serialize` e `Deserialize` para conversão JSON
//! conforme o formato retornado pelo endpoint de extração. Campos ausentes no
//! JSON assumem valores padrão em vez de falhar a decodificação.

use serde::{Deserialize, Serialize};

/// Metadados estruturados de uma receita, extraídos do documento de origem.
///
/// Somente `title` é tratado como opcional na mesclagem: um título vazio
/// preserva o título existente da receita. Os demais campos sobrescrevem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedRecipe {
    /// Título da receita conforme o documento (pode ser vazio).
    #[serde(default)]
    pub title: String,
    /// Subtítulo ou descrição curta (não persistido).
    #[serde(default)]
    pub sub_title: String,
    /// Descrição completa da receita.
    #[serde(default)]
    pub description: String,
    /// Tempo de cozimento em minutos.
    #[serde(default)]
    pub cook_time: u32,
    /// Informações nutricionais por porção (não persistidas).
    #[serde(default)]
    pub nutrition_info: NutritionInfo,
}

/// Informações nutricionais por porção.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionInfo {
    /// Calorias por porção.
    #[serde(default)]
    pub calories_per_serving: u32,
    /// Carboidratos líquidos por porção.
    #[serde(default)]
    pub net_carbs_per_serving: u32,
}

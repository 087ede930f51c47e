//! Equipment model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::identifier::Identifiers;

/// Status given to new equipment when the request names none
pub const DEFAULT_ESTADO: &str = "EM USO";

/// Equipment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i64,
    /// Asset category (Notebook, Celular, ...)
    pub tipo: String,
    /// Location label
    pub localizacao: String,
    pub fabricante: String,
    pub modelo: String,
    /// Vendor asset tag; empty when the record carries an IMEI
    pub service_tag: String,
    /// 10+ digit device identifier; empty when the record carries a service tag
    pub imei: String,
    /// Cost-center code
    pub centro_custo: String,
    /// Status label
    pub estado: String,
}

/// Create / update equipment request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EquipmentPayload {
    pub tipo: Option<String>,
    pub localizacao: Option<String>,
    pub fabricante: Option<String>,
    pub modelo: Option<String>,
    pub service_tag: Option<String>,
    pub imei: Option<String>,
    /// Combined identifier, classified as IMEI or service tag.
    /// Takes precedence over `service_tag` and `imei`.
    pub identificador: Option<String>,
    pub centro_custo: Option<String>,
    pub estado: Option<String>,
}

/// Field values written to a store, identifiers already classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentRecord {
    pub tipo: String,
    pub localizacao: String,
    pub fabricante: String,
    pub modelo: String,
    pub service_tag: String,
    pub imei: String,
    pub centro_custo: String,
    pub estado: String,
}

impl EquipmentRecord {
    /// Resolve a request body into the values to persist.
    ///
    /// The first non-empty of `identificador`, `service_tag` and `imei` is
    /// classified; the other two are discarded.
    pub fn from_payload(payload: &EquipmentPayload) -> Self {
        let identifier = [&payload.identificador, &payload.service_tag, &payload.imei]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .find(|v| !v.is_empty());
        let ids = Identifiers::classify(identifier);

        Self {
            tipo: payload.tipo.clone().unwrap_or_default(),
            localizacao: payload.localizacao.clone().unwrap_or_default(),
            fabricante: payload.fabricante.clone().unwrap_or_default(),
            modelo: payload.modelo.clone().unwrap_or_default(),
            service_tag: ids.service_tag,
            imei: ids.imei,
            centro_custo: payload.centro_custo.clone().unwrap_or_default(),
            estado: payload
                .estado
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_ESTADO.to_string()),
        }
    }

    pub fn into_equipment(self, id: i64) -> Equipment {
        Equipment {
            id,
            tipo: self.tipo,
            localizacao: self.localizacao,
            fabricante: self.fabricante,
            modelo: self.modelo,
            service_tag: self.service_tag,
            imei: self.imei,
            centro_custo: self.centro_custo,
            estado: self.estado,
        }
    }
}

/// Query parameters for the equipment list.
///
/// Pagination values are kept as raw strings and parsed leniently.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct EquipmentQuery {
    /// Page number (1-based, default 1)
    pub page: Option<String>,
    /// Records per page (default 10)
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
    /// Exact asset category
    pub tipo: Option<String>,
    /// Exact location
    pub localizacao: Option<String>,
    /// Exact manufacturer
    pub fabricante: Option<String>,
    /// Exact model
    pub modelo: Option<String>,
    /// Service tag substring (case-insensitive)
    pub tag: Option<String>,
    /// IMEI substring
    pub imei: Option<String>,
    /// Cost-center substring (case-insensitive)
    pub centro_custo: Option<String>,
}

/// Active filter clauses; all of them must hold for a record to match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentFilter {
    pub tipo: Option<String>,
    pub localizacao: Option<String>,
    pub fabricante: Option<String>,
    pub modelo: Option<String>,
    pub service_tag: Option<String>,
    pub imei: Option<String>,
    pub centro_custo: Option<String>,
}

fn active(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

fn contains_ci(value: &str, needle: &str) -> bool {
    value.to_lowercase().contains(&needle.to_lowercase())
}

impl EquipmentFilter {
    /// Empty filter values are treated as absent
    pub fn from_query(query: &EquipmentQuery) -> Self {
        Self {
            tipo: active(&query.tipo),
            localizacao: active(&query.localizacao),
            fabricante: active(&query.fabricante),
            modelo: active(&query.modelo),
            service_tag: active(&query.tag),
            imei: active(&query.imei),
            centro_custo: active(&query.centro_custo),
        }
    }

    /// Exact match on category, location, manufacturer and model;
    /// case-insensitive substring match on service tag, IMEI and cost center.
    pub fn matches(&self, equipment: &Equipment) -> bool {
        let exact = |f: &Option<String>, v: &str| f.as_deref().map_or(true, |f| f == v);
        let like = |f: &Option<String>, v: &str| f.as_deref().map_or(true, |f| contains_ci(v, f));

        exact(&self.tipo, &equipment.tipo)
            && exact(&self.localizacao, &equipment.localizacao)
            && exact(&self.fabricante, &equipment.fabricante)
            && exact(&self.modelo, &equipment.modelo)
            && like(&self.service_tag, &equipment.service_tag)
            && like(&self.imei, &equipment.imei)
            && like(&self.centro_custo, &equipment.centro_custo)
    }
}

/// Page envelope returned by the equipment list
#[derive(Debug, Serialize, ToSchema)]
pub struct EquipmentPage {
    /// Number of records matching the filters, across all pages
    pub total: i64,
    /// Page number that was served
    pub page: u64,
    pub data: Vec<Equipment>,
}

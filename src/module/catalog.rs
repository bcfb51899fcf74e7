//! Object Class Catalog
//!
//! The classification service is trained on a fixed set of twenty object
//! classes. This module holds the device-side copy of that table: one entry
//! per class id, with the display name the service reports and the spoken
//! description. Ids mirror the training order of the remote model, so the
//! table must not be reordered.

/// Spoken fallback when a reported name has no entry.
pub const DEFAULT_DESCRIPTION: &str = "Descripción no disponible.";

/// One catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassLabel {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
}

/// Read-only table of the known object classes.
///
/// Built once at startup and shared by every screen, so there is a single
/// source of truth for names and descriptions.
#[derive(Debug, Clone)]
pub struct Catalog {
    labels: Vec<ClassLabel>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Build the catalog with the service's class table.
    pub fn new() -> Self {
        Self::from_labels(vec![
            ClassLabel {
                id: 0,
                name: "Microscopio óptico avanzado",
                description: "Permite observar muestras pequeñas con luz y lentes.",
            },
            ClassLabel {
                id: 1,
                name: "Agitador magnético con placa calefactora",
                description: "Mezcla y calienta líquidos en laboratorios.",
            },
            ClassLabel {
                id: 2,
                name: "Aire acondicionado YORK",
                description: "Regula temperatura y aire en espacios cerrados.",
            },
            ClassLabel {
                id: 3,
                name: "Cafetera",
                description: "Prepara café automáticamente con agua caliente.",
            },
            ClassLabel {
                id: 4,
                name: "Computador",
                description: "Procesa información y ejecuta programas.",
            },
            ClassLabel {
                id: 5,
                name: "Control remoto de robot",
                description: "Permite manejar un robot a distancia.",
            },
            ClassLabel {
                id: 6,
                name: "Control remoto de Smart TV",
                description: "Mando para controlar funciones del televisor.",
            },
            ClassLabel {
                id: 7,
                name: "Estación de soldadura por aire caliente",
                description: "Para soldar componentes con aire caliente.",
            },
            ClassLabel {
                id: 8,
                name: "Impresora 3D Creality K1 Max",
                description: "Crea objetos 3D a partir de diseños digitales.",
            },
            ClassLabel {
                id: 9,
                name: "Mini fresadora CNC",
                description: "Corta o talla materiales controlada por computadora.",
            },
            ClassLabel {
                id: 10,
                name: "Mouse",
                description: "Dispositivo para interactuar con la computadora.",
            },
            ClassLabel {
                id: 11,
                name: "Osciloscopio digital Rigol DS1202ZE",
                description: "Visualiza señales eléctricas como ondas.",
            },
            ClassLabel {
                id: 12,
                name: "Puerta",
                description: "Permite o restringe el acceso a espacios.",
            },
            ClassLabel {
                id: 13,
                name: "Robot humanoide AULER",
                description: "Robot con forma y movimientos similares a un humano.",
            },
            ClassLabel {
                id: 14,
                name: "Robot LEGO Mindstorms EV3",
                description: "Kit educativo para construir y programar robots.",
            },
            ClassLabel {
                id: 15,
                name: "Router",
                description: "Distribuye internet a múltiples dispositivos.",
            },
            ClassLabel {
                id: 16,
                name: "Sensor de suelo integrado",
                description: "Mide humedad y temperatura del suelo.",
            },
            ClassLabel {
                id: 17,
                name: "Tablet",
                description: "Dispositivo táctil portátil con múltiples funciones.",
            },
            ClassLabel {
                id: 18,
                name: "Tomacorrientes 110V",
                description: "Permite conectar aparatos a la red eléctrica.",
            },
            ClassLabel {
                id: 19,
                name: "UPS Netio",
                description: "Suministro de energía en caso de cortes eléctricos.",
            },
        ])
    }

    /// Build a catalog from an explicit label list.
    pub fn from_labels(labels: Vec<ClassLabel>) -> Self {
        Self { labels }
    }

    /// Resolve the spoken description for a reported display name.
    ///
    /// The service response carries only the display name, so this is a
    /// reverse lookup: a case-sensitive exact-match linear scan over the
    /// table. The first entry with a matching name wins. Unknown names fall
    /// back to [`DEFAULT_DESCRIPTION`].
    pub fn describe(&self, name: &str) -> &str {
        self.labels
            .iter()
            .find(|label| label.name == name)
            .map(|label| label.description)
            .unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Number of known classes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

//! Registration of a department advance for a lot.
//!
//! One submission walks resolve-program → check-eligibility → register → refresh. Each
//! remote call happens once; the first failure stops the chain and is reported with the
//! message of its stage. The refresh runs whatever happened before it so the operator
//! always sees the lot's current state, and its own failures are only logged.

use async_trait::async_trait;

use super::events::{CapturaError, CapturaStage};
use super::request::{CapturaRequest, CapturaValida, RegistrarAvanceData};
use crate::domain::a009_lote::{
    Departamento, InfoPrograma, LoteSnapshot, OrdenDepartamentoResponse, PuedeAvanzarResponse,
};
use crate::shared::api::ApiResponse;
use crate::shared::error::ApiError;
use crate::shared::fallback::{program_years, FallbackChain, FallbackError};
use crate::shared::notice::Notice;

pub const AVANCE_REGISTRADO: &str = "Avance registrado correctamente";

/// Remote calls used by the capture workflow
#[async_trait(?Send)]
pub trait CapturaGateway {
    async fn info_programa(&self, lote: i32, year: i32) -> Result<Vec<InfoPrograma>, ApiError>;

    async fn orden_departamento(
        &self,
        departamento: Departamento,
    ) -> Result<OrdenDepartamentoResponse, ApiError>;

    async fn puede_avanzar(
        &self,
        lote: &str,
        programa: i32,
        orden: i32,
    ) -> Result<PuedeAvanzarResponse, ApiError>;

    async fn registrar_avance(&self, data: &RegistrarAvanceData) -> Result<ApiResponse, ApiError>;

    async fn info_lote(&self, lote: i32, year: i32) -> Result<Vec<LoteSnapshot>, ApiError>;
}

/// Advance that was registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvanceRegistrado {
    pub programa: i32,
    /// Program year actually used (may be the previous year)
    pub year: i32,
    pub departamento: Departamento,
}

/// Everything the screen needs after one submission
#[derive(Debug, Clone, PartialEq)]
pub struct CapturaOutcome {
    pub result: Result<AvanceRegistrado, CapturaError>,
    /// Refreshed lot state; `None` keeps whatever the screen showed before
    pub snapshot: Option<LoteSnapshot>,
    /// Department to highlight in the snapshot table
    pub highlighted: Option<Departamento>,
    /// Stages entered, in order
    pub stages: Vec<CapturaStage>,
}

impl CapturaOutcome {
    fn rejected(error: CapturaError) -> Self {
        Self {
            result: Err(error),
            snapshot: None,
            highlighted: None,
            stages: vec![CapturaStage::Idle],
        }
    }

    pub fn notice(&self) -> Notice {
        match &self.result {
            Ok(_) => Notice::success(AVANCE_REGISTRADO),
            Err(e) => Notice::error(e.to_string()),
        }
    }

    /// The lot-code input is cleared and refocused only after a successful registration
    pub fn clears_codigo(&self) -> bool {
        self.result.is_ok()
    }
}

struct ProgramaResuelto {
    id_prog: i32,
    year: i32,
}

async fn resolve_program<G: CapturaGateway + ?Sized>(
    gateway: &G,
    captura: &CapturaValida,
) -> Result<ProgramaResuelto, CapturaError> {
    let attempt = program_years(captura.year())
        .run(|year| {
            let year = *year;
            async move {
                log::debug!("captura: programa lote={} year={}", captura.lote, year);
                match gateway.info_programa(captura.lote, year).await {
                    Ok(programas) => Ok(programas.into_iter().next()),
                    Err(ApiError::NotFound) => Ok(None),
                    Err(e) => Err(e),
                }
            }
        })
        .await;

    match attempt {
        Ok((year, programa)) => Ok(ProgramaResuelto {
            id_prog: programa.id_prog,
            // the program row knows its own year; fall back to the year that answered
            year: if programa.years > 0 { programa.years } else { year },
        }),
        Err(FallbackError::Exhausted) => Err(CapturaError::ProgramaNoEncontrado),
        Err(FallbackError::Failed(error)) => Err(CapturaError::Remote {
            stage: CapturaStage::ResolvingProgram,
            error,
        }),
    }
}

async fn check_eligibility<G: CapturaGateway + ?Sized>(
    gateway: &G,
    captura: &CapturaValida,
    programa: i32,
) -> Result<(), CapturaError> {
    let remote = |error| CapturaError::Remote {
        stage: CapturaStage::CheckingEligibility,
        error,
    };
    let orden = gateway
        .orden_departamento(captura.departamento)
        .await
        .map_err(remote)?
        .orden;
    log::debug!("captura: orden {} = {}", captura.departamento.value(), orden);

    let puede = gateway
        .puede_avanzar(&captura.codigo, programa, orden)
        .await
        .map_err(remote)?;
    if puede.puede_avanzar {
        return Ok(());
    }
    let mensaje = puede.mensaje.trim();
    Err(CapturaError::NoPuedeAvanzar(if mensaje.is_empty() {
        CapturaStage::CheckingEligibility.failure_message().to_string()
    } else {
        mensaje.to_string()
    }))
}

/// Best-effort reload of the lot; any failure is logged and yields `None`
async fn refresh_snapshot<G: CapturaGateway + ?Sized>(
    gateway: &G,
    lote: i32,
    years: FallbackChain<i32>,
) -> Option<LoteSnapshot> {
    let attempt = years
        .run(|year| {
            let year = *year;
            async move {
                gateway
                    .info_lote(lote, year)
                    .await
                    .map(|rows| rows.into_iter().next())
            }
        })
        .await;
    match attempt {
        Ok((_, snapshot)) => Some(snapshot),
        Err(FallbackError::Exhausted) => None,
        Err(FallbackError::Failed(e)) => {
            log::warn!("captura: no se pudo refrescar el lote {}: {}", lote, e);
            None
        }
    }
}

/// Runs one capture submission end to end
pub async fn registrar_avance<G: CapturaGateway + ?Sized>(
    gateway: &G,
    request: &CapturaRequest,
) -> CapturaOutcome {
    let captura = match request.validate() {
        Ok(captura) => captura,
        Err(e) => return CapturaOutcome::rejected(e),
    };

    let mut stages = vec![CapturaStage::Idle, CapturaStage::ResolvingProgram];
    let mut program_year = None;

    let result = async {
        let programa = resolve_program(gateway, &captura).await?;
        program_year = Some(programa.year);

        stages.push(CapturaStage::CheckingEligibility);
        check_eligibility(gateway, &captura, programa.id_prog).await?;

        stages.push(CapturaStage::Registering);
        let data = RegistrarAvanceData::new(programa.id_prog, &captura);
        gateway
            .registrar_avance(&data)
            .await
            .map_err(|error| CapturaError::Remote {
                stage: CapturaStage::Registering,
                error,
            })?;

        Ok::<_, CapturaError>(AvanceRegistrado {
            programa: programa.id_prog,
            year: programa.year,
            departamento: captura.departamento,
        })
    }
    .await;

    match &result {
        Ok(avance) => log::debug!("captura: lote {} avanzó a {}", captura.lote, avance.departamento),
        Err(e) => log::debug!("captura: lote {} rechazado: {}", captura.lote, e),
    }

    stages.push(CapturaStage::Refreshing);
    let years = match (&result, program_year) {
        (Ok(avance), _) => FallbackChain::new([avance.year]),
        (Err(_), Some(year)) => FallbackChain::new([year]),
        (Err(_), None) => program_years(captura.year()),
    };
    let snapshot = refresh_snapshot(gateway, captura.lote, years).await;
    stages.push(CapturaStage::Idle);

    let highlighted = snapshot.as_ref().map(|_| captura.departamento);
    CapturaOutcome {
        result,
        snapshot,
        highlighted,
        stages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeGateway {
        programas: Vec<(i32, InfoPrograma)>,
        puede: PuedeAvanzarResponse,
        registrar_falla: bool,
        lote_falla: bool,
        calls: RefCell<Vec<String>>,
    }

    impl FakeGateway {
        fn elegible() -> Self {
            Self {
                programas: vec![(
                    2025,
                    InfoPrograma {
                        id_prog: 77,
                        years: 2025,
                        ..Default::default()
                    },
                )],
                puede: PuedeAvanzarResponse {
                    puede_avanzar: true,
                    mensaje: String::new(),
                },
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn called(&self, prefix: &str) -> bool {
            self.calls.borrow().iter().any(|c| c.starts_with(prefix))
        }
    }

    #[async_trait(?Send)]
    impl CapturaGateway for FakeGateway {
        async fn info_programa(&self, lote: i32, year: i32) -> Result<Vec<InfoPrograma>, ApiError> {
            self.calls.borrow_mut().push(format!("programa {} {}", lote, year));
            let found: Vec<InfoPrograma> = self
                .programas
                .iter()
                .filter(|(y, _)| *y == year)
                .map(|(_, p)| p.clone())
                .collect();
            if found.is_empty() {
                Err(ApiError::NotFound)
            } else {
                Ok(found)
            }
        }

        async fn orden_departamento(
            &self,
            departamento: Departamento,
        ) -> Result<OrdenDepartamentoResponse, ApiError> {
            self.calls.borrow_mut().push(format!("orden {}", departamento.value()));
            Ok(OrdenDepartamentoResponse { orden: 2 })
        }

        async fn puede_avanzar(
            &self,
            lote: &str,
            programa: i32,
            orden: i32,
        ) -> Result<PuedeAvanzarResponse, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("puede {} {} {}", lote, programa, orden));
            Ok(self.puede.clone())
        }

        async fn registrar_avance(&self, data: &RegistrarAvanceData) -> Result<ApiResponse, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("registrar {} {}", data.lote, data.maquila));
            if self.registrar_falla {
                Err(ApiError::from_status(500, Some("Lote bloqueado".into())))
            } else {
                Ok(ApiResponse {
                    success: true,
                    message: "ok".into(),
                })
            }
        }

        async fn info_lote(&self, lote: i32, year: i32) -> Result<Vec<LoteSnapshot>, ApiError> {
            self.calls.borrow_mut().push(format!("lote {} {}", lote, year));
            if self.lote_falla {
                return Err(ApiError::Network("offline".into()));
            }
            Ok(vec![LoteSnapshot {
                lote: Some(lote.to_string()),
                inyeccion: Some("2025-01-03 09:00".into()),
                ..Default::default()
            }])
        }
    }

    fn request(codigo: &str) -> CapturaRequest {
        CapturaRequest {
            codigo: codigo.to_string(),
            departamento: Some(Departamento::Inyeccion),
            fecha: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_successful_capture() {
        let gateway = FakeGateway::elegible();
        let outcome = registrar_avance(&gateway, &request("1520")).await;

        assert_eq!(
            outcome.result,
            Ok(AvanceRegistrado {
                programa: 77,
                year: 2025,
                departamento: Departamento::Inyeccion
            })
        );
        assert!(outcome.clears_codigo());
        assert_eq!(outcome.notice(), Notice::success(AVANCE_REGISTRADO));
        assert_eq!(outcome.highlighted, Some(Departamento::Inyeccion));
        assert_eq!(
            gateway.calls(),
            vec![
                "programa 1520 2025",
                "orden inyeccion",
                "puede 1520 77 2",
                "registrar 1520 lninyec",
                "lote 1520 2025",
            ]
        );
        assert_eq!(
            outcome.stages,
            vec![
                CapturaStage::Idle,
                CapturaStage::ResolvingProgram,
                CapturaStage::CheckingEligibility,
                CapturaStage::Registering,
                CapturaStage::Refreshing,
                CapturaStage::Idle,
            ]
        );
    }

    #[tokio::test]
    async fn test_program_falls_back_to_previous_year() {
        let mut gateway = FakeGateway::elegible();
        gateway.programas = vec![(
            2024,
            InfoPrograma {
                id_prog: 55,
                years: 2024,
                ..Default::default()
            },
        )];
        let outcome = registrar_avance(&gateway, &request("1520")).await;

        assert_eq!(outcome.result.as_ref().map(|a| a.year), Ok(2024));
        assert!(gateway.called("programa 1520 2024"));
        assert!(gateway.called("lote 1520 2024"));
    }

    #[tokio::test]
    async fn test_eligibility_rejection_skips_register_but_refreshes() {
        let mut gateway = FakeGateway::elegible();
        gateway.puede = PuedeAvanzarResponse {
            puede_avanzar: false,
            mensaje: "Ya registrado".into(),
        };
        let outcome = registrar_avance(&gateway, &request("1520")).await;

        assert_eq!(
            outcome.result,
            Err(CapturaError::NoPuedeAvanzar("Ya registrado".into()))
        );
        assert_eq!(outcome.notice(), Notice::error("Ya registrado"));
        assert!(!gateway.called("registrar"));
        assert!(gateway.called("lote 1520"));
        assert!(outcome.snapshot.is_some());
        assert!(!outcome.clears_codigo());
    }

    #[tokio::test]
    async fn test_missing_program_tries_both_years_for_refresh() {
        let mut gateway = FakeGateway::elegible();
        gateway.programas.clear();
        let outcome = registrar_avance(&gateway, &request("1520")).await;

        assert_eq!(outcome.result, Err(CapturaError::ProgramaNoEncontrado));
        assert!(gateway.called("programa 1520 2024"));
        assert!(!gateway.called("orden"));
        assert!(gateway.called("lote 1520 2025"));
    }

    #[tokio::test]
    async fn test_register_failure_and_refresh_failure_are_both_survivable() {
        let mut gateway = FakeGateway::elegible();
        gateway.registrar_falla = true;
        gateway.lote_falla = true;
        let outcome = registrar_avance(&gateway, &request("1520")).await;

        assert_eq!(outcome.notice(), Notice::error("Lote bloqueado"));
        assert_eq!(outcome.snapshot, None);
        assert_eq!(outcome.highlighted, None);
    }

    #[tokio::test]
    async fn test_validation_failure_makes_no_calls() {
        let gateway = FakeGateway::elegible();
        let outcome = registrar_avance(&gateway, &request("abc")).await;
        assert_eq!(outcome.result, Err(CapturaError::CodigoNoNumerico));
        assert!(gateway.calls().is_empty());
    }
}

use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use cgmath::{InnerSpace, Point3, Vector3};
use eyre::{Context, Result, bail};
use serde::Serialize;
use speedcube_core::{
    CubeSize, CubeState, Face, FaceletState, Move, MoveError, PermutationState, Scramble,
    SliceGeometry, SolveRequest, apply_notation,
};
use speedcube_prefs::{ConcurrentMovePolicy, Preferences};
use speedcube_view::{MoveOutcome, RotationController};

/// Time between animation frames when replaying moves.
const FRAME: Duration = Duration::from_millis(16);

/// Rubik's cube command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,

    /// Preferences file to use instead of the default location.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,
}

/// State representation to apply moves to.
#[derive(clap::ValueEnum, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Model {
    /// Sticker grid, for any size.
    #[default]
    Grid,
    /// Corner and edge permutation, for 3x3x3 only.
    Permutation,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply a move sequence to a solved cube and print the result as JSON.
    Apply {
        /// Whitespace-separated moves, such as `R U R' U'`.
        moves: String,
        /// Number of layers.
        #[arg(short, long)]
        size: Option<u8>,
        /// State representation.
        #[arg(short, long, value_enum, default_value_t)]
        model: Model,
        /// Allow layer numbers such as `2R`.
        #[arg(long)]
        layered: bool,
    },
    /// Generate a scramble and print it as JSON.
    Scramble {
        /// Number of moves.
        #[arg(short, long)]
        length: Option<usize>,
        /// Random seed, for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of layers.
        #[arg(short, long)]
        size: Option<u8>,
    },
    /// Check a facelet string and print info about it as JSON.
    Check {
        /// Facelet string in face letters (`URFDLB`) or color letters
        /// (`WRGYOB`).
        facelets: String,
    },
    /// Print the elements that turn with a layer as JSON.
    Slice {
        /// Face that the layer is measured from.
        face: Face,
        /// Depth of the layer, starting from 0.
        slice: u8,
        /// Number of layers.
        #[arg(short, long)]
        size: Option<u8>,
        /// Distance between adjacent cubie centers.
        #[arg(long)]
        spacing: Option<f32>,
    },
    /// Print the move inferred from dragging a sticker as JSON.
    #[command(allow_negative_numbers = true)]
    Drag {
        /// Face of the sticker that was dragged.
        face: Face,
        /// X coordinate of the center of the dragged cubie.
        x: f32,
        /// Y coordinate of the center of the dragged cubie.
        y: f32,
        /// Z coordinate of the center of the dragged cubie.
        z: f32,
        /// X component of the drag.
        dx: f32,
        /// Y component of the drag.
        dy: f32,
        /// Z component of the drag.
        dz: f32,
        /// Number of layers.
        #[arg(short, long)]
        size: Option<u8>,
    },
    /// Play back a JSON array of moves through the rotation controller and
    /// print the final state as JSON.
    Replay {
        /// JSON file of moves, use '-' for stdin.
        #[arg(value_parser)]
        input: clio::Input,
        /// Number of layers.
        #[arg(short, long)]
        size: Option<u8>,
        /// What to do with moves requested during a rotation.
        #[arg(long)]
        policy: Option<ConcurrentMovePolicy>,
    },
    /// Apply a move sequence to a solved 3x3x3 cube and ask the solving
    /// service for a solution.
    Solve {
        /// Whitespace-separated moves, such as `R U R' U'`.
        moves: String,
        /// Base URL of the solving service.
        #[arg(long)]
        url: Option<String>,
    },
    /// Print the effective preferences as YAML.
    Prefs {
        /// Also write them to the preferences file.
        #[arg(long)]
        save: bool,
    },
}

#[derive(Serialize, Debug)]
struct StateReport {
    facelets: String,
    solved: bool,
}
impl StateReport {
    fn new(state: &impl CubeState) -> Self {
        Self {
            facelets: state.to_facelet_string(),
            solved: state.is_solved(),
        }
    }
}

pub(crate) fn exec(subcommand: Subcommand, prefs: &Preferences) -> Result<()> {
    match subcommand {
        Subcommand::Apply {
            moves,
            size,
            model,
            layered,
        } => {
            let size = cube_size(size, prefs)?;
            let mut features = prefs.interaction.notation_features();
            features.layer_prefix |= layered;
            let report = match model {
                Model::Grid => {
                    let state = apply_notation(&FaceletState::new_solved(size), &moves, features)?;
                    StateReport::new(&state)
                }
                Model::Permutation => {
                    if size != CubeSize::THREE {
                        bail!("the permutation model only supports {}", CubeSize::THREE);
                    }
                    let state = apply_notation(&PermutationState::default(), &moves, features)?;
                    StateReport::new(&state)
                }
            };
            write_json_output(&report)
        }

        Subcommand::Scramble { length, seed, size } => {
            let length = length.unwrap_or(prefs.interaction.scramble_length);
            let scramble = match seed {
                Some(seed) => Scramble::from_seed(seed, length),
                None => Scramble::new(length),
            };
            let state = scramble.apply_to(&FaceletState::new_solved(cube_size(size, prefs)?))?;

            #[derive(Serialize)]
            struct ScrambleReport {
                seed: u64,
                scramble: String,
                facelets: String,
            }
            write_json_output(&ScrambleReport {
                seed: scramble.seed,
                scramble: scramble.to_string(),
                facelets: state.to_facelet_string(),
            })
        }

        Subcommand::Check { facelets } => {
            let state: FaceletState = facelets.parse().context("error parsing facelets")?;
            let color_error = state.check_color_counts().err();
            let reachable = (state.size() == CubeSize::THREE && color_error.is_none())
                .then(|| PermutationState::from_facelets(&state));

            #[derive(Serialize)]
            struct CheckReport {
                size: u8,
                solved: bool,
                #[serde(skip_serializing_if = "Option::is_none")]
                verified: Option<bool>,
                #[serde(skip_serializing_if = "Option::is_none")]
                error: Option<String>,
            }
            let error = match (&color_error, &reachable) {
                (Some(e), _) => Some(e.to_string()),
                (None, Some(Err(e))) => Some(e.to_string()),
                _ => None,
            };
            write_json_output(&CheckReport {
                size: state.size().get(),
                solved: state.is_solved(),
                verified: reachable.map(|r| r.is_ok()),
                error,
            })
        }

        Subcommand::Slice {
            face,
            slice,
            size,
            spacing,
        } => {
            let geometry = SliceGeometry::new(
                cube_size(size, prefs)?,
                spacing.unwrap_or(prefs.interaction.spacing),
            );
            write_json_output(&geometry.query(Move::new(face, slice, true)))
        }

        Subcommand::Drag {
            face,
            x,
            y,
            z,
            dx,
            dy,
            dz,
            size,
        } => {
            let geometry = SliceGeometry::new(cube_size(size, prefs)?, prefs.interaction.spacing);
            let drag = Vector3::new(dx, dy, dz);
            let mv = if prefs.interaction.is_drag(drag.magnitude()) {
                geometry.infer_drag_move(face, Point3::new(x, y, z), drag)
            } else {
                log::info!("drag is shorter than {}", prefs.interaction.drag_threshold);
                None
            };

            #[derive(Serialize)]
            struct DragReport {
                #[serde(rename = "move")]
                mv: Option<Move>,
                notation: Option<String>,
            }
            write_json_output(&DragReport {
                mv,
                notation: mv.map(|mv| mv.to_string()),
            })
        }

        Subcommand::Replay {
            mut input,
            size,
            policy,
        } => {
            let mut buffer = String::new();
            input
                .read_to_string(&mut buffer)
                .context("error reading moves")?;
            let moves: Vec<Move> = serde_json::from_str(&buffer).context("error parsing moves")?;

            let size = cube_size(size, prefs)?;
            let mut animation = prefs.animation.clone();
            if let Some(policy) = policy {
                animation.concurrent_moves = policy;
            }
            let replay_duration = animation.replay_duration()?;
            let controller = RotationController::new(
                FaceletState::new_solved(size),
                SliceGeometry::new(size, prefs.interaction.spacing),
                animation,
            );

            let done = AtomicBool::new(false);
            let outcomes = std::thread::scope(|s| {
                s.spawn(|| {
                    while !done.load(Ordering::Acquire) {
                        controller.tick(FRAME);
                        std::thread::sleep(FRAME);
                    }
                });
                let outcomes = moves
                    .iter()
                    .map(|&mv| {
                        let mv = match mv.duration() {
                            Some(_) => mv,
                            None => mv.with_duration(replay_duration),
                        };
                        let completion = controller.request(mv)?;
                        Ok(pollster::block_on(completion))
                    })
                    .collect::<Result<Vec<MoveOutcome>, MoveError>>();
                done.store(true, Ordering::Release);
                outcomes
            })?;

            let completed = outcomes
                .iter()
                .filter(|o| **o == MoveOutcome::Completed)
                .count();
            log::info!("replayed {completed} of {} moves", moves.len());

            #[derive(Serialize)]
            struct ReplayReport {
                requested: usize,
                completed: usize,
                #[serde(flatten)]
                state: StateReport,
            }
            write_json_output(&ReplayReport {
                requested: moves.len(),
                completed,
                state: StateReport::new(&controller.state()),
            })
        }

        Subcommand::Solve { moves, url } => {
            let state = apply_notation(
                &PermutationState::default(),
                &moves,
                prefs.interaction.notation_features(),
            )?;
            let base_url = url.as_deref().unwrap_or(&prefs.solver.url);
            let request = SolveRequest::new(base_url, &state)?;
            log::info!("sending {}", request.url());

            let solution = ureq::post(request.endpoint())
                .query("state", &request.state)
                .send_empty()
                .context("error contacting solving service")?
                .into_body()
                .read_to_string()
                .context("error reading solution")?;
            println!("{solution}");
            Ok(())
        }

        Subcommand::Prefs { save } => {
            if save {
                prefs.save(None)?;
            }
            let yaml = serde_norway::to_string(prefs).context("error serializing preferences")?;
            print!("{yaml}");
            Ok(())
        }
    }
}

fn cube_size(size: Option<u8>, prefs: &Preferences) -> Result<CubeSize> {
    match size {
        Some(n) => Ok(CubeSize::try_from(n)?),
        None => Ok(prefs.interaction.size()?),
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

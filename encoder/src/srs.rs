use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_std::One;
use crossbeam_channel::{bounded, Receiver, Sender};
use rust_da_bn254_primitives::consts::{
    SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED,
};
use rust_da_bn254_primitives::errors::KzgError;
use rust_da_bn254_primitives::helpers;
use rust_da_bn254_primitives::traits::ReadPointFromBytes;
use std::fs::File;
use std::io::{self, BufReader, Read};

/// The structured reference string consumed by the encoder: monomial-form
/// powers of tau in both groups.
///
/// `g1[i] = tau^i * g1` and `g2[i] = tau^i * g2` for `i < points loaded`.
/// Commitments use the bottom of G1, length proofs the top, and the frame
/// verifier needs `g2[chunk_len]`.
#[derive(Debug, PartialEq, Clone)]
pub struct SRS {
    pub g1: Vec<G1Affine>,
    pub g2: Vec<G2Affine>,
    /// The order of the setup ceremony the points came from, which may
    /// exceed the number of points loaded.
    pub order: u32,
}

impl SRS {
    /// Loads the SRS from the `g1.point.N` / `g2.point.N` file pair: raw
    /// sequential compressed points, big-endian, no framing.
    ///
    /// # Arguments
    ///
    /// * `g1_path` / `g2_path` - Paths of the two point files.
    /// * `order` - The total order of the setup.
    /// * `points_to_load` - How many points to read from each file.
    pub fn new(
        g1_path: &str,
        g2_path: &str,
        order: u32,
        points_to_load: u32,
    ) -> Result<Self, KzgError> {
        if points_to_load > order {
            return Err(KzgError::GenericError(
                "number of points to load exceeds SRS order".to_string(),
            ));
        }

        let g1 = Self::parallel_read_points::<G1Affine>(
            g1_path.to_owned(),
            SIZE_OF_G1_AFFINE_COMPRESSED,
            points_to_load,
            false,
        )?;
        let g2 = Self::parallel_read_points::<G2Affine>(
            g2_path.to_owned(),
            SIZE_OF_G2_AFFINE_COMPRESSED,
            points_to_load,
            false,
        )?;

        Ok(Self { g1, g2, order })
    }

    /// Deterministic powers-of-tau setup for tests and local development.
    /// The secret is derived from a fixed string, so the result offers no
    /// security whatsoever.
    pub fn insecure_setup(points_to_load: u32) -> SRS {
        let tau = helpers::hash_to_field_element(b"insecure deterministic trusted setup");

        let mut g1 = Vec::with_capacity(points_to_load as usize);
        let mut g2 = Vec::with_capacity(points_to_load as usize);
        let mut power = Fr::one();
        for _ in 0..points_to_load {
            g1.push(G1Affine::generator() * power);
            g2.push(G2Affine::generator() * power);
            power *= tau;
        }

        SRS {
            g1: G1Projective::normalize_batch(&g1),
            g2: G2Projective::normalize_batch(&g2),
            order: points_to_load,
        }
    }

    fn process_chunks<T>(receiver: Receiver<(Vec<u8>, usize, bool)>) -> Result<Vec<(T, usize)>, KzgError>
    where
        T: ReadPointFromBytes,
    {
        receiver
            .iter()
            .map(|(chunk, position, is_native)| {
                let point = if is_native {
                    T::read_point_from_bytes_native_compressed(&chunk)
                } else {
                    T::read_point_from_bytes_be(&chunk)
                };
                point
                    .map(|p| (p, position))
                    .map_err(|e| KzgError::SerializationError(e.to_string()))
            })
            .collect()
    }

    /// Reads points from a file with one reader thread fanning fixed-size
    /// chunks out to one parser worker per cpu, then reassembles the points
    /// in file order.
    fn parallel_read_points<T>(
        file_path: String,
        point_size: usize,
        points_to_load: u32,
        is_native: bool,
    ) -> Result<Vec<T>, KzgError>
    where
        T: ReadPointFromBytes + Send + 'static,
    {
        let (sender, receiver) = bounded::<(Vec<u8>, usize, bool)>(1000);

        let reader_handle = std::thread::spawn(move || -> io::Result<()> {
            Self::read_file_chunks(&file_path, sender, point_size, points_to_load, is_native)
        });

        let num_workers = num_cpus::get();
        let workers: Vec<_> = (0..num_workers)
            .map(|_| {
                let receiver = receiver.clone();
                std::thread::spawn(move || Self::process_chunks::<T>(receiver))
            })
            .collect();

        match reader_handle.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(KzgError::SerializationError(e.to_string())),
            Err(_) => {
                return Err(KzgError::GenericError("reader thread panicked".to_string()));
            }
        }

        let mut all_points = Vec::new();
        for worker in workers {
            let points = worker
                .join()
                .map_err(|_| KzgError::GenericError("worker thread panicked".to_string()))??;
            all_points.extend(points);
        }

        // Sort by original position to restore file order.
        all_points.sort_by_key(|&(_, position)| position);

        if all_points.len() != points_to_load as usize {
            return Err(KzgError::GenericError(format!(
                "expected {} points, but got {}",
                points_to_load,
                all_points.len()
            )));
        }

        Ok(all_points.into_iter().map(|(point, _)| point).collect())
    }

    fn read_file_chunks(
        file_path: &str,
        sender: Sender<(Vec<u8>, usize, bool)>,
        point_size: usize,
        num_points: u32,
        is_native: bool,
    ) -> io::Result<()> {
        let file = File::open(file_path)?;
        let mut reader = BufReader::new(file);
        let mut position = 0;
        let mut buffer = vec![0u8; point_size];

        let mut i = 0;
        while let Ok(bytes_read) = reader.read(&mut buffer) {
            if bytes_read == 0 {
                break;
            }
            sender
                .send((buffer[..bytes_read].to_vec(), position, is_native))
                .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "chunk receiver closed"))?;
            position += 1;
            buffer.resize(point_size, 0);
            i += 1;
            if num_points == i {
                break;
            }
        }
        Ok(())
    }
}

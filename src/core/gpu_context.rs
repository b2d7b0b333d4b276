use std::sync::Arc;
use wgpu::{Adapter, Device, DeviceDescriptor, Features, Instance, Limits, Queue, Surface};

use crate::error::{PixelWindowError, Result};

/// Device and queue shared by the surface renderer
///
/// Cloning is cheap (Arc).
#[derive(Clone)]
pub struct GpuContext {
    device: Arc<Device>,
    queue: Arc<Queue>,
}

impl GpuContext {
    /// Create a GPU context compatible with a surface
    ///
    /// Returns the adapter as well so the caller can query surface capabilities.
    pub async fn new_with_surface(instance: &Instance, surface: &Surface<'_>) -> Result<(Self, Adapter)> {
        let adapter = Self::request_adapter(instance, surface).await?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = Self::request_device(&adapter).await?;

        Ok((
            Self {
                device: Arc::new(device),
                queue: Arc::new(queue),
            },
            adapter,
        ))
    }

    /// Get reference to the device
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Get reference to the queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    async fn request_adapter(instance: &Instance, surface: &Surface<'_>) -> Result<Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| PixelWindowError::presentation(format!("no suitable adapter: {:?}", e)))
    }

    async fn request_device(adapter: &Adapter) -> Result<(Device, Queue)> {
        adapter
            .request_device(&DeviceDescriptor {
                label: Some("Pixel Window Device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits()),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| PixelWindowError::presentation(format!("failed to create device: {:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_semantics() {
        // Creating a context needs real GPU hardware; check the Arc sharing at compile time
        fn assert_clone<T: Clone>() {}
        assert_clone::<GpuContext>();
    }
}
